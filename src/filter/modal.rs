//! Exponential modal damping matrix.
//!
//! The filter acts diagonally on modal coefficients ordered by degree:
//!
//! σ(m) = 1                                          for m < N_c - 1
//! σ(m) = exp(-α ((m - (N_c - 1)) / (N_p - N_c))^s)   for m ≥ N_c - 1
//!
//! where N_p is the number of modes, N_c the cutoff and s the filter order.
//! With α = -ln(ε) the highest mode is scaled to machine epsilon
//! (Hesthaven & Warburton, Nodal DG Methods, pp. 130, 186).

use faer::Mat;

use super::config::FilterConfig;
use crate::error::{FilterError, Result};
use crate::polynomial::num_polynomials;

/// Default damping strength: -ln(ε) for `f64` (≈ 36.04).
pub fn default_alpha() -> f64 {
    -f64::EPSILON.ln()
}

/// Largest accepted damping strength: -ln(f64::MIN_POSITIVE) (≈ 708.4).
///
/// Beyond it exp(-α) underflows and the highest modes would be zeroed.
pub fn max_alpha() -> f64 {
    -f64::MIN_POSITIVE.ln()
}

/// Damping factor of one mode.
///
/// Modes below `cutoff - 1` are left untouched, and `nfilt = 0` means no
/// mode is damped.
pub fn exponential_mode_response(
    mode: usize,
    alpha: f64,
    cutoff: usize,
    nfilt: usize,
    filter_order: i32,
) -> f64 {
    let nstart = cutoff.saturating_sub(1);
    if nfilt == 0 || mode < nstart {
        return 1.0;
    }
    let eta = (mode - nstart) as f64 / nfilt as f64;
    (-alpha * eta.powi(filter_order)).exp()
}

/// Build the modal damping matrix for (dim, order, cutoff, filter_order).
///
/// # Errors
/// [`FilterError::InvalidFilterParameter`] if `dim < 1`, `cutoff < 1`,
/// `filter_order < 1`, alpha is outside (0, [`max_alpha`]], or the mode
/// count overflows.
///
/// # Example
///
/// ```
/// use dg_filter::build_modal_filter;
///
/// let filter = build_modal_filter(1, 3, 2, 2).unwrap();
/// let d = filter.diagonal();
/// assert_eq!(d[0], 1.0);
/// assert_eq!(d[1], 1.0);
/// assert!(d[3] < 1e-15);
/// ```
pub fn build_modal_filter(
    dim: usize,
    order: usize,
    cutoff: usize,
    filter_order: usize,
) -> Result<ModalFilter> {
    FilterConfig::new(dim, order, cutoff, filter_order).build()
}

/// Immutable diagonal damping matrix in modal space.
#[derive(Clone, Debug)]
pub struct ModalFilter {
    matrix: Mat<f64>,
    config: FilterConfig,
}

impl ModalFilter {
    /// Validate `config` and build its damping matrix.
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        let FilterConfig {
            dim,
            order,
            cutoff,
            filter_order,
            ..
        } = *config;

        if dim < 1 {
            return Err(FilterError::invalid_parameter(
                "dim",
                format!("must be at least 1, got {}", dim),
            ));
        }
        if cutoff < 1 {
            return Err(FilterError::invalid_parameter(
                "cutoff",
                format!("must be at least 1, got {}", cutoff),
            ));
        }
        let exponent = match i32::try_from(filter_order) {
            Ok(s) if s >= 1 => s,
            _ => {
                return Err(FilterError::invalid_parameter(
                    "filter_order",
                    format!("must be a positive integer, got {}", filter_order),
                ));
            }
        };
        let alpha = config.alpha();
        if !alpha.is_finite() || alpha <= 0.0 || alpha > max_alpha() {
            return Err(FilterError::invalid_parameter(
                "alpha",
                format!("must be in (0, {:.1}], got {}", max_alpha(), alpha),
            ));
        }
        let npol = num_polynomials(dim, order).ok_or_else(|| {
            FilterError::invalid_parameter(
                "order",
                format!("mode count overflows for dim {} and order {}", dim, order),
            )
        })?;

        let mut matrix = Mat::identity(npol, npol);

        if cutoff >= npol {
            log::debug!(
                "Cutoff {} covers all {} modes (dim {}, order {}): identity filter",
                cutoff,
                npol,
                dim,
                order
            );
        } else {
            let nfilt = npol - cutoff;
            for m in (cutoff - 1)..npol {
                matrix[(m, m)] = exponential_mode_response(m, alpha, cutoff, nfilt, exponent);
            }
        }

        Ok(Self {
            matrix,
            config: *config,
        })
    }

    /// Number of modes (matrix size).
    pub fn npol(&self) -> usize {
        self.matrix.nrows()
    }

    /// The `npol × npol` damping matrix.
    pub fn matrix(&self) -> &Mat<f64> {
        &self.matrix
    }

    /// Diagonal damping factors, one per mode.
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.npol()).map(|m| self.matrix[(m, m)]).collect()
    }

    /// True if no mode is damped.
    pub fn is_identity(&self) -> bool {
        (0..self.npol()).all(|m| self.matrix[(m, m)] == 1.0)
    }

    /// Parameters the matrix was built from.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_exact_identity(filter: &ModalFilter) -> bool {
        let n = filter.npol();
        (0..n).all(|i| {
            (0..n).all(|j| filter.matrix()[(i, j)] == if i == j { 1.0 } else { 0.0 })
        })
    }

    #[test]
    fn test_reference_case() {
        // dim=1, order=3, cutoff=2, s=2: npol=4, nstart=1, nfilt=2
        let filter = build_modal_filter(1, 3, 2, 2).unwrap();
        let alpha = default_alpha();
        let d = filter.diagonal();

        assert_eq!(filter.npol(), 4);
        assert_eq!(d[0], 1.0);
        assert_eq!(d[1], 1.0);
        assert!((d[2] - (-alpha * 0.25).exp()).abs() < 1e-18);
        assert!((d[2] - 1.2207e-4).abs() < 1e-8);
        assert!((d[3] - f64::EPSILON).abs() < 1e-20);
    }

    #[test]
    fn test_off_diagonal_is_zero() {
        let filter = build_modal_filter(2, 4, 3, 4).unwrap();
        let n = filter.npol();
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    assert_eq!(filter.matrix()[(i, j)], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_identity_when_cutoff_covers_all_modes() {
        for dim in 1..=3 {
            for order in 0..=5 {
                let npol = num_polynomials(dim, order).unwrap();
                for cutoff in [npol, npol + 1, npol + 10] {
                    let filter = build_modal_filter(dim, order, cutoff, 3).unwrap();
                    assert!(is_exact_identity(&filter), "dim {} order {} cutoff {}", dim, order, cutoff);
                    assert!(filter.is_identity());
                }
            }
        }
    }

    #[test]
    fn test_profile_is_monotone_and_bounded() {
        for dim in 1..=3 {
            for order in 1..=6 {
                let npol = num_polynomials(dim, order).unwrap();
                for cutoff in 1..npol {
                    for s in [1, 2, 8, 16] {
                        let d = build_modal_filter(dim, order, cutoff, s).unwrap().diagonal();
                        assert_eq!(d[cutoff - 1], 1.0);
                        assert!(d[..cutoff].iter().all(|&v| v == 1.0));
                        assert!(d.iter().all(|&v| v > 0.0 && v <= 1.0));
                        assert!(d[cutoff - 1..].windows(2).all(|w| w[1] <= w[0]));
                        assert!((d[npol - 1] - f64::EPSILON).abs() < 1e-20);
                    }
                }
            }
        }
    }

    #[test]
    fn test_larger_filter_order_is_flatter() {
        let soft = build_modal_filter(1, 8, 2, 2).unwrap().diagonal();
        let sharp = build_modal_filter(1, 8, 2, 16).unwrap().diagonal();
        for m in 2..8 {
            assert!(sharp[m] > soft[m], "mode {}: {} vs {}", m, sharp[m], soft[m]);
        }
    }

    #[test]
    fn test_custom_alpha() {
        let filter = FilterConfig::new(1, 3, 1, 1).with_alpha(2.0).build().unwrap();
        let d = filter.diagonal();
        assert!((d[3] - (-2.0f64).exp()).abs() < 1e-15);
        assert!((d[2] - (-2.0 * 2.0 / 3.0f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_invalid_parameters() {
        let cases = [
            (FilterConfig::new(0, 3, 2, 2), "dim"),
            (FilterConfig::new(1, 3, 0, 2), "cutoff"),
            (FilterConfig::new(1, 3, 2, 0), "filter_order"),
            (FilterConfig::new(1, 3, 2, usize::MAX), "filter_order"),
            (FilterConfig::new(1, 3, 2, 2).with_alpha(0.0), "alpha"),
            (FilterConfig::new(1, 3, 2, 2).with_alpha(f64::NAN), "alpha"),
            (FilterConfig::new(1, 3, 2, 2).with_alpha(800.0), "alpha"),
            (FilterConfig::new(1, 3, 2, 2).with_alpha(f64::INFINITY), "alpha"),
            (FilterConfig::new(4, usize::MAX - 1, 2, 2), "order"),
        ];

        for (config, name) in cases {
            match config.build() {
                Err(FilterError::InvalidFilterParameter { parameter, .. }) => {
                    assert_eq!(parameter, name)
                }
                other => panic!("{:?}: expected invalid {}, got {:?}", config, name, other),
            }
        }
    }

    #[test]
    fn test_strongest_alpha_stays_positive() {
        let d = FilterConfig::new(1, 3, 2, 2)
            .with_alpha(max_alpha())
            .build()
            .unwrap()
            .diagonal();
        assert!(d.iter().all(|&v| v > 0.0 && v <= 1.0), "{:?}", d);
        assert!(d[3] >= f64::MIN_POSITIVE * 0.5);
    }

    #[test]
    fn test_mode_response_below_cutoff() {
        assert_eq!(exponential_mode_response(0, 36.0, 3, 5, 2), 1.0);
        assert_eq!(exponential_mode_response(2, 36.0, 3, 5, 2), 1.0);
        assert_eq!(exponential_mode_response(7, 36.0, 3, 0, 2), 1.0);
        assert!((exponential_mode_response(7, 36.0, 3, 5, 2) - (-36.0f64).exp()).abs() < 1e-20);
    }

    #[test]
    fn test_config_is_kept() {
        let filter = build_modal_filter(3, 2, 4, 6).unwrap();
        assert_eq!(filter.config(), &FilterConfig::new(3, 2, 4, 6));
        assert_eq!(filter.npol(), 10);
    }
}
