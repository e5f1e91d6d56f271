//! Exponential spectral filtering.
//!
//! The filter is built in two stages:
//! - [`ModalFilter`]: diagonal damping of modal coefficients, a function of
//!   (dim, order, cutoff, filter_order) only
//! - [`SpectralFilter`]: the same damping moved to nodal space once per
//!   element group (F = V D V⁻¹) and applied batch-wise to nodal fields
//!
//! ```
//! use dg_filter::{Discretization, ExecutionContext, FilterConfig, SimplexGroup, SpectralFilter};
//!
//! let discr = Discretization::new()
//!     .with_group(SimplexGroup::new(2, 3, 16))
//!     .with_group(SimplexGroup::new(2, 3, 4));
//! let filter = SpectralFilter::from_config(&discr, &FilterConfig::new(2, 3, 4, 8)).unwrap();
//!
//! let rho = discr.field_from_fn(|_, _, r| (3.0 * r[0]).sin() * r[1]);
//! let out = filter.apply(&ExecutionContext::default(), &[rho]).unwrap();
//! assert_eq!(out.len(), 1);
//! ```

mod config;
mod engine;
mod modal;
mod nodal;

pub use config::FilterConfig;
pub use engine::{GroupFilter, SpectralFilter};
pub use modal::{
    ModalFilter, build_modal_filter, default_alpha, exponential_mode_response, max_alpha,
};
pub use nodal::{NodalFilterOperator, OperatorCache, compute_nodal_operator};
