//! Field storage partitioned by element group.
//!
//! A [`FieldArray`] holds one scalar field over a whole discretization as
//! one [`GroupArray`] block per element group, in group order. A set of
//! fields filtered together is a plain slice `&[FieldArray]`.

mod group_array;

pub use group_array::GroupArray;

use crate::types::GroupIndex;

/// One scalar field, stored as one nodal block per element group.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldArray {
    groups: Vec<GroupArray>,
}

impl FieldArray {
    /// Assemble a field from per-group blocks, in group order.
    pub fn new(groups: Vec<GroupArray>) -> Self {
        Self { groups }
    }

    /// Zero-initialized field with the same group partitioning.
    pub fn zeros_like(&self) -> Self {
        Self {
            groups: self
                .groups
                .iter()
                .map(|g| GroupArray::zeros(g.n_elements(), g.n_nodes()))
                .collect(),
        }
    }

    /// Number of group blocks.
    pub fn n_groups(&self) -> usize {
        self.groups.len()
    }

    /// Block for group `g`.
    pub fn group(&self, g: GroupIndex) -> &GroupArray {
        &self.groups[g]
    }

    /// Mutable block for group `g`.
    pub fn group_mut(&mut self, g: GroupIndex) -> &mut GroupArray {
        &mut self.groups[g]
    }

    /// All group blocks, in group order.
    pub fn groups(&self) -> &[GroupArray] {
        &self.groups
    }

    /// Total number of nodal values.
    pub fn n_dofs(&self) -> usize {
        self.groups.iter().map(|g| g.as_slice().len()).sum()
    }

    /// Maximum absolute nodal value over all groups.
    pub fn max_abs(&self) -> f64 {
        self.groups.iter().fold(0.0f64, |acc, g| acc.max(g.max_abs()))
    }
}
