//! Filter parameter bundle.

use super::modal::{ModalFilter, default_alpha};
use crate::error::Result;

/// Parameters of the exponential spectral filter.
///
/// # Example
///
/// ```
/// use dg_filter::FilterConfig;
///
/// let filter = FilterConfig::new(2, 4, 3, 8).build().unwrap();
/// assert_eq!(filter.npol(), 15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterConfig {
    /// Reference-space dimension (≥ 1)
    pub dim: usize,
    /// Polynomial order of the discretization
    pub order: usize,
    /// Number of leading modes left undamped (≥ 1)
    pub cutoff: usize,
    /// Steepness of the damping profile (≥ 1; larger = flatter near the cutoff)
    pub filter_order: usize,
    /// Damping strength at the highest mode; `None` damps it to machine epsilon
    #[cfg_attr(feature = "serde", serde(default))]
    pub alpha: Option<f64>,
}

impl FilterConfig {
    /// Create a configuration with the default damping strength.
    pub fn new(dim: usize, order: usize, cutoff: usize, filter_order: usize) -> Self {
        Self {
            dim,
            order,
            cutoff,
            filter_order,
            alpha: None,
        }
    }

    /// Override the damping strength.
    ///
    /// The highest mode is scaled by `exp(-alpha)`.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Damping strength in effect: the override, or `-ln(f64::EPSILON)`.
    pub fn alpha(&self) -> f64 {
        self.alpha.unwrap_or_else(default_alpha)
    }

    /// Build the modal damping matrix.
    pub fn build(&self) -> Result<ModalFilter> {
        ModalFilter::from_config(self)
    }
}
