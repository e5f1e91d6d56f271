//! Orthonormal polynomial basis on the reference simplex.
//!
//! Reference simplices use the [-1, 1] convention:
//! - 1D: the interval [-1, 1]
//! - 2D: the triangle with vertices (-1,-1), (1,-1), (-1,1)
//! - 3D: the tetrahedron with vertices (-1,-1,-1), (1,-1,-1), (-1,1,-1), (-1,-1,1)
//!
//! The basis is the Proriol-Koornwinder-Dubiner-Owens (PKDO) family: a
//! collapsed-coordinate tensor product of orthonormal Jacobi polynomials.
//! Modes are indexed by multi-indices (i, j, k) of total degree ≤ N and
//! ordered by increasing total degree, so mode index grows with
//! polynomial degree. Spectral filters rely on this ordering.

use super::jacobi::jacobi_normalized;
use super::legendre::legendre_normalized;

/// Tolerance for detecting the collapsed vertex of the simplex.
const COLLAPSE_TOL: f64 = 1e-12;

/// Number of polynomials of total degree ≤ `order` in `dim` variables.
///
/// This is C(order + dim, dim) = ∏_{d=1}^{dim} (order + d) / dim!.
/// Computed incrementally so every intermediate value is an exact
/// binomial coefficient. Returns `None` on overflow.
pub fn num_polynomials(dim: usize, order: usize) -> Option<usize> {
    let mut npol: usize = 1;
    for d in 1..=dim {
        // npol * (order + d) / d stays integral: C(order+d-1, d-1) * (order+d) / d = C(order+d, d)
        npol = npol.checked_mul(order.checked_add(d)?)? / d;
    }
    Some(npol)
}

/// Multi-indices of all modes with total degree ≤ `order`, graded by degree.
///
/// Within one total degree, indices are listed with the first component
/// descending, e.g. for 2D degree 1: (1, 0), (0, 1).
pub fn simplex_mode_degrees(dim: usize, order: usize) -> Vec<Vec<usize>> {
    let mut modes = Vec::with_capacity(num_polynomials(dim, order).unwrap_or(0));
    for total in 0..=order {
        push_tuples_summing_to(dim, total, &mut Vec::with_capacity(dim), &mut modes);
    }
    modes
}

fn push_tuples_summing_to(
    remaining_dims: usize,
    total: usize,
    prefix: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if remaining_dims == 0 {
        if total == 0 {
            out.push(prefix.clone());
        }
        return;
    }
    if remaining_dims == 1 {
        prefix.push(total);
        out.push(prefix.clone());
        prefix.pop();
        return;
    }
    for first in (0..=total).rev() {
        prefix.push(first);
        push_tuples_summing_to(remaining_dims - 1, total - first, prefix, out);
        prefix.pop();
    }
}

/// Evaluate the orthonormal simplex basis function with multi-index `degrees`
/// at a reference point.
///
/// `point.len()` and `degrees.len()` give the dimension (1, 2 or 3).
///
/// # Panics
/// Panics if the dimension is not 1, 2 or 3, or if `point` and `degrees`
/// have different lengths.
pub fn simplex_basis(degrees: &[usize], point: &[f64]) -> f64 {
    assert_eq!(
        degrees.len(),
        point.len(),
        "Mode and point dimensions differ"
    );

    match *degrees {
        [i] => legendre_normalized(i, point[0]),
        [i, j] => {
            let (a, b) = rs_to_ab(point[0], point[1]);
            let h1 = jacobi_normalized(i, 0, 0, a);
            let h2 = jacobi_normalized(j, 2 * i + 1, 0, b);
            std::f64::consts::SQRT_2 * h1 * h2 * (1.0 - b).powi(i as i32)
        }
        [i, j, k] => {
            let (a, b, c) = rst_to_abc(point[0], point[1], point[2]);
            let h1 = jacobi_normalized(i, 0, 0, a);
            let h2 = jacobi_normalized(j, 2 * i + 1, 0, b);
            let h3 = jacobi_normalized(k, 2 * (i + j) + 2, 0, c);
            2.0 * std::f64::consts::SQRT_2
                * h1
                * h2
                * (1.0 - b).powi(i as i32)
                * h3
                * (1.0 - c).powi((i + j) as i32)
        }
        _ => panic!("Simplex basis supports dimensions 1-3, got {}", degrees.len()),
    }
}

/// Collapse triangle coordinates (r, s) to the square (a, b).
fn rs_to_ab(r: f64, s: f64) -> (f64, f64) {
    let a = if (1.0 - s).abs() > COLLAPSE_TOL {
        2.0 * (1.0 + r) / (1.0 - s) - 1.0
    } else {
        -1.0
    };
    (a, s)
}

/// Collapse tetrahedron coordinates (r, s, t) to the cube (a, b, c).
fn rst_to_abc(r: f64, s: f64, t: f64) -> (f64, f64, f64) {
    let a = if (s + t).abs() > COLLAPSE_TOL {
        2.0 * (1.0 + r) / (-s - t) - 1.0
    } else {
        -1.0
    };
    let b = if (1.0 - t).abs() > COLLAPSE_TOL {
        2.0 * (1.0 + s) / (1.0 - t) - 1.0
    } else {
        -1.0
    };
    (a, b, t)
}
