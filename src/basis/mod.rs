//! Nodal-modal transformations.
//!
//! This module provides the generalized Vandermonde matrix of an element
//! group, its inverse, and the singularity check applied while building
//! filter operators.

mod vandermonde;

pub use vandermonde::{SINGULAR_CONDITION_LIMIT, Vandermonde};
