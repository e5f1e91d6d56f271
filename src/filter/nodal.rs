//! Per-group nodal filter operators.
//!
//! For a group with Vandermonde matrix V the modal damping D is moved to
//! nodal space as F = V D V⁻¹, so that filtering an element is a single
//! matrix-vector product on its nodal values.

use faer::Mat;

use super::modal::ModalFilter;
use crate::basis::Vandermonde;
use crate::discretization::{Discretization, ElementGroup};
use crate::error::{FilterError, Result};
use crate::types::GroupIndex;

/// Dense nodal filter matrix of one element group.
#[derive(Clone, Debug)]
pub struct NodalFilterOperator {
    group: GroupIndex,
    matrix: Mat<f64>,
}

impl NodalFilterOperator {
    /// Group this operator was built for.
    pub fn group(&self) -> GroupIndex {
        self.group
    }

    /// The `n_out × n_in` operator matrix.
    pub fn matrix(&self) -> &Mat<f64> {
        &self.matrix
    }

    /// Input node count.
    pub fn n_in(&self) -> usize {
        self.matrix.ncols()
    }

    /// Output node count.
    pub fn n_out(&self) -> usize {
        self.matrix.nrows()
    }
}

/// Build F = V · D · V⁻¹ for one group.
///
/// # Errors
/// - [`FilterError::ShapeMismatch`] if the group's mode count differs from
///   the modal filter size, or its node count differs from its mode count
/// - [`FilterError::SingularBasis`] if V cannot be inverted
pub fn compute_nodal_operator(
    group: &dyn ElementGroup,
    index: GroupIndex,
    modal: &ModalFilter,
) -> Result<NodalFilterOperator> {
    let npol = modal.npol();
    if group.n_modes() != npol {
        return Err(FilterError::shape_mismatch(
            format!("group {} mode count vs modal filter size", index),
            npol,
            group.n_modes(),
        ));
    }

    let vander = Vandermonde::from_group(group, index)?;
    let d = modal.matrix();
    let n = vander.n();

    // V * D
    let mut vd = Mat::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += vander.v[(i, k)] * d[(k, j)];
            }
            vd[(i, j)] = sum;
        }
    }

    // (V * D) * V^{-1}
    let mut matrix = Mat::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += vd[(i, k)] * vander.v_inv[(k, j)];
            }
            matrix[(i, j)] = sum;
        }
    }

    log::debug!(
        "Built {}x{} filter operator for group {} ({}, condition {:.3e})",
        n,
        n,
        index,
        group.name(),
        vander.condition
    );

    Ok(NodalFilterOperator {
        group: index,
        matrix,
    })
}

/// Arena of nodal operators indexed by [`GroupIndex`].
///
/// Populated once, in group order; never recomputed.
#[derive(Clone, Debug, Default)]
pub struct OperatorCache {
    operators: Vec<NodalFilterOperator>,
}

impl OperatorCache {
    /// Build the operator of every group of `discr`.
    pub fn build(discr: &Discretization, modal: &ModalFilter) -> Result<Self> {
        let operators = discr
            .groups()
            .map(|(g, group)| compute_nodal_operator(group, g, modal))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { operators })
    }

    /// Operator of group `g`, if it exists.
    pub fn get(&self, g: GroupIndex) -> Option<&NodalFilterOperator> {
        self.operators.get(g.get())
    }

    /// Number of cached operators.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// True if no operator is cached.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Iterate over operators in group order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NodalFilterOperator> {
        self.operators.iter()
    }
}
