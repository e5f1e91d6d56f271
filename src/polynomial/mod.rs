//! Polynomial evaluation and node generation.
//!
//! This module provides:
//! - 1D Legendre polynomials and orthonormal Jacobi polynomials
//! - The orthonormal PKDO basis on 1D/2D/3D reference simplices, graded by degree
//! - Gauss-Lobatto-Legendre nodes, warp-and-blend triangle nodes and
//!   equispaced simplex nodes

mod jacobi;
mod legendre;
mod nodes;
mod simplex;

pub use jacobi::jacobi_normalized;
pub use legendre::{legendre, legendre_and_derivative, legendre_normalized};
pub use nodes::{equispaced_simplex_nodes, gauss_lobatto_nodes, warp_blend_triangle_nodes};
pub use simplex::{num_polynomials, simplex_basis, simplex_mode_degrees};
