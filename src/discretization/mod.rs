//! Element groups and the discretization that orders them.
//!
//! The filter consumes a discretization only through this interface:
//! - [`ElementGroup`]: node/element counts, reference nodes, basis functions
//! - [`Discretization`]: the ordered collection of groups plus zero-initialized
//!   field allocation
//!
//! Reference group implementations:
//! - [`SimplexGroup`]: orthonormal PKDO basis on intervals, triangles, tetrahedra
//! - [`NodalGroup`]: explicit nodes with a caller-supplied basis closure

mod group;
mod nodal;
mod simplex;

pub use group::{BoxedGroup, ElementGroup};
pub use nodal::{BasisFn, NodalGroup};
pub use simplex::SimplexGroup;

use std::fmt;

use crate::field::{FieldArray, GroupArray};
use crate::types::{ElementIndex, GroupIndex};

/// Ordered collection of element groups.
///
/// Group order is significant: the position of a group is its
/// [`GroupIndex`], and every [`FieldArray`] stores its blocks in the same
/// order.
#[derive(Default)]
pub struct Discretization {
    groups: Vec<BoxedGroup>,
}

impl Discretization {
    /// Create an empty discretization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group, builder style.
    pub fn with_group(mut self, group: impl ElementGroup + 'static) -> Self {
        self.push_group(group);
        self
    }

    /// Append a group and return its index.
    pub fn push_group(&mut self, group: impl ElementGroup + 'static) -> GroupIndex {
        self.groups.push(Box::new(group));
        GroupIndex::new(self.groups.len() - 1)
    }

    /// Number of groups.
    pub fn n_groups(&self) -> usize {
        self.groups.len()
    }

    /// Group at index `g`.
    pub fn group(&self, g: GroupIndex) -> &dyn ElementGroup {
        &*self.groups[g]
    }

    /// Iterate over (index, group) pairs in order.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = (GroupIndex, &dyn ElementGroup)> {
        self.groups
            .iter()
            .enumerate()
            .map(|(g, group)| (GroupIndex::new(g), &**group))
    }

    /// Total nodal degrees of freedom of one scalar field.
    pub fn n_dofs(&self) -> usize {
        self.groups
            .iter()
            .map(|g| g.n_elements() * g.n_nodes())
            .sum()
    }

    /// Allocate a zero-initialized field over all groups.
    pub fn zeros(&self) -> FieldArray {
        FieldArray::new(
            self.groups
                .iter()
                .map(|g| GroupArray::zeros(g.n_elements(), g.n_nodes()))
                .collect(),
        )
    }

    /// Allocate a field and fill it from a function of
    /// (group, element, reference node coordinates).
    pub fn field_from_fn<F>(&self, f: F) -> FieldArray
    where
        F: Fn(GroupIndex, ElementIndex, &[f64]) -> f64,
    {
        let mut field = self.zeros();
        for (g, group) in self.groups() {
            let block = field.group_mut(g);
            for k in ElementIndex::iter(group.n_elements()) {
                let values = block.element_mut(k.get());
                for (i, value) in values.iter_mut().enumerate() {
                    *value = f(g, k, group.unit_node(i));
                }
            }
        }
        field
    }
}

impl fmt::Debug for Discretization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.groups.iter().map(|g| {
                format!(
                    "{}(dim={}, n_elements={}, n_nodes={})",
                    g.name(),
                    g.dim(),
                    g.n_elements(),
                    g.n_nodes()
                )
            }))
            .finish()
    }
}
