//! # dg-filter
//!
//! Exponential spectral filtering for nodal discontinuous Galerkin
//! discretizations.
//!
//! This crate provides:
//! - Modal damping matrices (exponential filter, Hesthaven & Warburton)
//! - Per-element-group nodal filter operators F = V D V⁻¹, built once
//! - Batched application to sets of nodal fields (scalar, faer, Rayon)
//! - Reference element groups: orthonormal simplex bases in 1D/2D/3D
//!   and caller-defined nodal groups

pub mod basis;
pub mod discretization;
pub mod error;
pub mod field;
pub mod filter;
pub mod kernel;
pub mod polynomial;
pub mod types;

// Re-export main types for convenience
pub use basis::Vandermonde;
pub use discretization::{Discretization, ElementGroup, NodalGroup, SimplexGroup};
pub use error::{FilterError, Result};
pub use field::{FieldArray, GroupArray};
pub use filter::{
    FilterConfig, GroupFilter, ModalFilter, NodalFilterOperator, SpectralFilter,
    build_modal_filter, compute_nodal_operator,
};
pub use kernel::{ExecutionContext, KernelBackend};
pub use types::{ElementIndex, GroupIndex};
