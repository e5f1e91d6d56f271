//! Generalized Vandermonde matrix for nodal-modal transformations.
//!
//! The Vandermonde matrix V connects nodal and modal representations:
//! - V[i,j] = φ_j(r_i) where φ_j is the j-th basis function and r_i is the i-th node
//! - nodal_values = V * modal_coeffs
//! - modal_coeffs = V^{-1} * nodal_values

use crate::discretization::ElementGroup;
use crate::error::{FilterError, Result};
use crate::types::GroupIndex;
use faer::{Mat, linalg::solvers::Solve};

/// 1-norm condition estimate above which V is treated as singular: 1/ε.
///
/// Well-posed nodal sets stay below ~1e3 for the orders used in practice;
/// badly scaled but invertible bases are accepted up to this limit.
pub const SINGULAR_CONDITION_LIMIT: f64 = 1.0 / f64::EPSILON;

/// Largest accepted entry of V V⁻¹ - I.
const INVERSE_RESIDUAL_TOL: f64 = 1e-6;

/// Vandermonde matrix of one element group and its inverse.
#[derive(Clone, Debug)]
pub struct Vandermonde {
    /// Vandermonde matrix: V[i,j] = φ_j(r_i)
    pub v: Mat<f64>,
    /// Inverse Vandermonde matrix
    pub v_inv: Mat<f64>,
    /// 1-norm condition number ||V||₁ ||V⁻¹||₁
    pub condition: f64,
}

impl Vandermonde {
    /// Build V for `group` and invert it.
    ///
    /// `index` only labels errors.
    ///
    /// # Errors
    /// - [`FilterError::ShapeMismatch`] if the group has different node and mode counts
    /// - [`FilterError::SingularBasis`] if V is not invertible: its inverse
    ///   has non-finite entries, its condition estimate exceeds
    ///   [`SINGULAR_CONDITION_LIMIT`], or max |V V⁻¹ - I| exceeds 1e-6
    pub fn from_group(group: &dyn ElementGroup, index: GroupIndex) -> Result<Self> {
        let n = group.n_nodes();
        if group.n_modes() != n {
            return Err(FilterError::shape_mismatch(
                format!("group {} basis count vs node count", index),
                n,
                group.n_modes(),
            ));
        }

        let mut v = Mat::zeros(n, n);
        for i in 0..n {
            let node = group.unit_node(i);
            for j in 0..n {
                v[(i, j)] = group.evaluate_basis(j, node);
            }
        }

        Self::from_matrix(v, index)
    }

    /// Invert an already assembled square Vandermonde matrix.
    pub fn from_matrix(v: Mat<f64>, index: GroupIndex) -> Result<Self> {
        let n = v.nrows();
        if v.ncols() != n {
            return Err(FilterError::shape_mismatch(
                format!("group {} Vandermonde columns", index),
                n,
                v.ncols(),
            ));
        }

        // Compute inverse using LU decomposition with row pivoting
        let lu = v.as_ref().partial_piv_lu();
        let v_inv = lu.solve(&Mat::<f64>::identity(n, n));

        let inverse_is_finite = (0..n).all(|i| (0..n).all(|j| v_inv[(i, j)].is_finite()));
        let condition = if inverse_is_finite {
            norm_1(&v) * norm_1(&v_inv)
        } else {
            f64::INFINITY
        };

        if condition > SINGULAR_CONDITION_LIMIT || inverse_residual(&v, &v_inv) > INVERSE_RESIDUAL_TOL {
            return Err(FilterError::SingularBasis {
                group: index,
                condition,
            });
        }

        Ok(Self {
            v,
            v_inv,
            condition,
        })
    }

    /// Number of nodes (= number of modes).
    pub fn n(&self) -> usize {
        self.v.nrows()
    }

    /// Modal coefficients of nodal values: V⁻¹ u.
    ///
    /// # Errors
    /// [`FilterError::ShapeMismatch`] if `nodal.len() != self.n()`.
    pub fn to_modal(&self, nodal: &[f64]) -> Result<Vec<f64>> {
        mat_vec(&self.v_inv, nodal, "nodal values")
    }

    /// Nodal values of modal coefficients: V û.
    ///
    /// # Errors
    /// [`FilterError::ShapeMismatch`] if `modal.len() != self.n()`.
    pub fn to_nodal(&self, modal: &[f64]) -> Result<Vec<f64>> {
        mat_vec(&self.v, modal, "modal coefficients")
    }
}

fn mat_vec(a: &Mat<f64>, x: &[f64], what: &str) -> Result<Vec<f64>> {
    if a.ncols() != x.len() {
        return Err(FilterError::shape_mismatch(
            format!("Vandermonde transform of {}", what),
            a.ncols(),
            x.len(),
        ));
    }
    let mut y = vec![0.0; a.nrows()];
    for (i, yi) in y.iter_mut().enumerate() {
        for (j, &xj) in x.iter().enumerate() {
            *yi += a[(i, j)] * xj;
        }
    }
    Ok(y)
}

/// max |(A B - I)_ij|, infinite if any entry is not finite.
fn inverse_residual(a: &Mat<f64>, b: &Mat<f64>) -> f64 {
    let n = a.nrows();
    let mut worst: f64 = 0.0;
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a[(i, k)] * b[(k, j)];
            }
            let target = if i == j { 1.0 } else { 0.0 };
            let err = (sum - target).abs();
            if !err.is_finite() {
                return f64::INFINITY;
            }
            worst = worst.max(err);
        }
    }
    worst
}

/// Maximum absolute column sum.
fn norm_1(a: &Mat<f64>) -> f64 {
    (0..a.ncols())
        .map(|j| (0..a.nrows()).map(|i| a[(i, j)].abs()).sum::<f64>())
        .fold(0.0, f64::max)
}
