//! Legendre polynomial evaluation.
//!
//! Legendre polynomials P_n(x) are orthogonal on [-1, 1] with weight 1:
//! ∫_{-1}^{1} P_m(x) P_n(x) dx = 2/(2n+1) δ_{mn}

/// Evaluate Legendre polynomial P_n(x) using three-term recurrence.
///
/// The recurrence relation is:
/// P_0(x) = 1
/// P_1(x) = x
/// (n+1) P_{n+1}(x) = (2n+1) x P_n(x) - n P_{n-1}(x)
pub fn legendre(n: usize, x: f64) -> f64 {
    legendre_pair(n, x).0
}

/// Evaluate the orthonormal Legendre polynomial sqrt((2n+1)/2) P_n(x).
///
/// This is the 1D member of the orthonormal simplex basis family, so
/// ∫_{-1}^{1} φ_m φ_n dx = δ_{mn}.
pub fn legendre_normalized(n: usize, x: f64) -> f64 {
    ((2 * n + 1) as f64 / 2.0).sqrt() * legendre(n, x)
}

/// Evaluate both P_n(x) and P'_n(x).
///
/// The derivative uses
/// P'_n(x) = n (x P_n(x) - P_{n-1}(x)) / (x^2 - 1)  for |x| != 1
/// P'_n(±1) = (±1)^{n+1} n(n+1)/2
pub fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    if n == 1 {
        return (x, 1.0);
    }

    let (p_n, p_n_minus_1) = legendre_pair(n, x);

    // Handle boundary cases where x^2 - 1 = 0
    let dp_n = if (x - 1.0).abs() < 1e-14 {
        (n * (n + 1)) as f64 / 2.0
    } else if (x + 1.0).abs() < 1e-14 {
        let sign = if n % 2 == 0 { -1.0 } else { 1.0 };
        sign * (n * (n + 1)) as f64 / 2.0
    } else {
        n as f64 * (x * p_n - p_n_minus_1) / (x * x - 1.0)
    };

    (p_n, dp_n)
}

/// Returns (P_n(x), P_{n-1}(x)), with P_{-1} taken as 0.
fn legendre_pair(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }

    let mut p_prev = 1.0; // P_{k-1}
    let mut p_curr = x; // P_k

    for k in 1..n {
        let p_next = ((2 * k + 1) as f64 * x * p_curr - k as f64 * p_prev) / (k + 1) as f64;
        p_prev = p_curr;
        p_curr = p_next;
    }

    (p_curr, p_prev)
}
