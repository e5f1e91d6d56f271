//! Error types for filter construction and application.

use thiserror::Error;

use crate::types::GroupIndex;

/// Errors raised while building or applying a spectral filter.
///
/// All variants are fatal for the call that produced them; nothing is
/// retried and no partial result is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A filter parameter is outside its valid range.
    #[error("Invalid filter parameter `{parameter}`: {reason}")]
    InvalidFilterParameter {
        parameter: &'static str,
        reason: String,
    },

    /// The Vandermonde matrix of a group is not invertible.
    ///
    /// Raised when the LU inverse has non-finite entries, the 1-norm
    /// condition estimate exceeds
    /// [`SINGULAR_CONDITION_LIMIT`](crate::basis::SINGULAR_CONDITION_LIMIT)
    /// (1/ε), or max |V V⁻¹ - I| exceeds 1e-6.
    #[error("Singular Vandermonde matrix for group {group} (condition estimate {condition:e})")]
    SingularBasis { group: GroupIndex, condition: f64 },

    /// Two dimensions that must agree do not.
    #[error("Shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },
}

impl FilterError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidFilterParameter {
            parameter,
            reason: reason.into(),
        }
    }

    /// Create a shape mismatch error.
    pub fn shape_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FilterError>;
