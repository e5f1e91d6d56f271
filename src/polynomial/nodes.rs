//! Reference-element interpolation nodes.
//!
//! - Gauss-Lobatto-Legendre (GLL) nodes on [-1, 1]
//! - Warp-and-blend nodes on the reference triangle (Warburton 2006)
//! - Equispaced nodes on any reference simplex
//!
//! The N+1 GLL nodes are the roots of (1-x²)P'_N(x), which includes the
//! endpoints x = ±1. They are the 1D interpolation nodes of choice for
//! nodal DG and the edge distribution the triangle nodes are warped to.

use super::legendre::legendre_and_derivative;
use std::f64::consts::PI;

/// Optimized blending parameters for warp-and-blend triangle nodes, N = 1..=15.
const TRIANGLE_ALPHA_OPT: [f64; 15] = [
    0.0000, 0.0000, 1.4152, 0.1001, 0.2751, 0.9800, 1.0999, 1.2832, 1.3648, 1.4773, 1.4959,
    1.5743, 1.5770, 1.6223, 1.6258,
];

/// Compute Gauss-Lobatto-Legendre nodes for polynomial order N.
///
/// Returns N+1 nodes in [-1, 1], including the endpoints.
/// Uses Newton iteration starting from Chebyshev-Lobatto nodes.
pub fn gauss_lobatto_nodes(order: usize) -> Vec<f64> {
    let n = order;

    if n == 0 {
        return vec![0.0];
    }
    if n == 1 {
        return vec![-1.0, 1.0];
    }

    // Initial guess: Chebyshev-Lobatto nodes x_j = -cos(π j / N)
    let mut nodes: Vec<f64> = (0..=n).map(|j| -(PI * j as f64 / n as f64).cos()).collect();

    // Endpoints are exact
    nodes[0] = -1.0;
    nodes[n] = 1.0;

    // Newton iteration on L_N(x) = (1-x²) P'_N(x), using L'_N = -N(N+1) P_N
    for node in nodes.iter_mut().take(n).skip(1) {
        let mut x = *node;

        for _ in 0..100 {
            let (p_n, dp_n) = legendre_and_derivative(n, x);
            let update = (1.0 - x * x) * dp_n / (n as f64 * (n + 1) as f64 * p_n);

            if update.abs() < 1e-15 {
                break;
            }

            x += update;
        }

        *node = x;
    }

    nodes
}

/// Equispaced nodes on the reference simplex of dimension `dim`.
///
/// Node (i, j, k) sits at r = -1 + 2i/N, s = -1 + 2j/N, t = -1 + 2k/N for
/// all i + j + k ≤ N. Order 0 returns the centroid.
pub fn equispaced_simplex_nodes(dim: usize, order: usize) -> Vec<Vec<f64>> {
    if order == 0 {
        let centroid = -1.0 + 2.0 / (dim as f64 + 1.0);
        return vec![vec![centroid; dim]];
    }

    let h = 2.0 / order as f64;
    super::simplex_mode_degrees(dim, order)
        .into_iter()
        .map(|index| index.iter().map(|&i| -1.0 + h * i as f64).collect())
        .collect()
}

/// Warp-and-blend interpolation nodes on the reference triangle.
///
/// Starts from an equilateral-triangle equispaced lattice, warps each edge
/// direction towards the GLL distribution, blends the warps into the
/// interior, and maps back to the (r, s) reference triangle. For N > 15 the
/// blending parameter falls back to 5/3.
pub fn warp_blend_triangle_nodes(order: usize) -> Vec<[f64; 2]> {
    if order == 0 {
        return vec![[-1.0 / 3.0, -1.0 / 3.0]];
    }

    let n = order as f64;
    let alpha = TRIANGLE_ALPHA_OPT
        .get(order - 1)
        .copied()
        .unwrap_or(5.0 / 3.0);
    let sqrt3 = 3f64.sqrt();

    let gll = gauss_lobatto_nodes(order);
    let equi: Vec<f64> = (0..=order).map(|i| -1.0 + 2.0 * i as f64 / n).collect();

    let mut nodes = Vec::with_capacity((order + 1) * (order + 2) / 2);
    for i in 0..=order {
        for j in 0..=(order - i) {
            // Barycentric coordinates of the equispaced lattice
            let l1 = i as f64 / n;
            let l3 = j as f64 / n;
            let l2 = 1.0 - l1 - l3;

            // Equilateral triangle coordinates
            let mut x = -l2 + l3;
            let mut y = (-l2 - l3 + 2.0 * l1) / sqrt3;

            let blend1 = 4.0 * l2 * l3;
            let blend2 = 4.0 * l1 * l3;
            let blend3 = 4.0 * l1 * l2;

            let warp1 = blend1 * warp_factor(&gll, &equi, l3 - l2) * (1.0 + (alpha * l1).powi(2));
            let warp2 = blend2 * warp_factor(&gll, &equi, l1 - l3) * (1.0 + (alpha * l2).powi(2));
            let warp3 = blend3 * warp_factor(&gll, &equi, l2 - l1) * (1.0 + (alpha * l3).powi(2));

            let (c2, s2) = ((2.0 * PI / 3.0).cos(), (2.0 * PI / 3.0).sin());
            let (c3, s3) = ((4.0 * PI / 3.0).cos(), (4.0 * PI / 3.0).sin());
            x += warp1 + c2 * warp2 + c3 * warp3;
            y += s2 * warp2 + s3 * warp3;

            nodes.push(equilateral_to_reference(x, y));
        }
    }

    nodes
}

/// Edge warp: interpolant of (GLL - equispaced) displacement, scaled by 1/(1-r²).
fn warp_factor(gll: &[f64], equi: &[f64], r: f64) -> f64 {
    if r.abs() >= 1.0 - 1e-10 {
        return 0.0;
    }

    let mut warp = 0.0;
    for (k, (&x_gll, &x_eq)) in gll.iter().zip(equi).enumerate() {
        let lagrange: f64 = equi
            .iter()
            .enumerate()
            .filter(|&(m, _)| m != k)
            .map(|(_, &x_m)| (r - x_m) / (x_eq - x_m))
            .product();
        warp += lagrange * (x_gll - x_eq);
    }

    warp / (1.0 - r * r)
}

/// Map equilateral-triangle coordinates (x, y) to reference (r, s).
fn equilateral_to_reference(x: f64, y: f64) -> [f64; 2] {
    let sqrt3 = 3f64.sqrt();
    let l1 = (sqrt3 * y + 1.0) / 3.0;
    let l2 = (-3.0 * x - sqrt3 * y + 2.0) / 6.0;
    let l3 = (3.0 * x - sqrt3 * y + 2.0) / 6.0;
    [-l2 + l3 - l1, -l2 - l3 + l1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_endpoints() {
        for order in 1..=6 {
            let nodes = gauss_lobatto_nodes(order);
            assert!((nodes[0] - (-1.0)).abs() < 1e-14, "Left endpoint");
            assert!((nodes[order] - 1.0).abs() < 1e-14, "Right endpoint");
        }
    }

    #[test]
    fn test_nodes_symmetry() {
        for order in 1..=6 {
            let nodes = gauss_lobatto_nodes(order);
            let n = nodes.len();
            for i in 0..n / 2 {
                assert!(
                    (nodes[i] + nodes[n - 1 - i]).abs() < 1e-14,
                    "Nodes should be symmetric"
                );
            }
        }
    }

    #[test]
    fn test_nodes_are_gll() {
        // Interior GLL nodes are roots of P'_N
        for order in 2..=6 {
            let nodes = gauss_lobatto_nodes(order);
            for j in 1..order {
                let (_, dp) = legendre_and_derivative(order, nodes[j]);
                assert!(
                    dp.abs() < 1e-12,
                    "Interior node {} should be root of P'_N, got {}",
                    j,
                    dp
                );
            }
        }
    }

    #[test]
    fn test_equispaced_simplex_nodes() {
        let nodes = equispaced_simplex_nodes(2, 2);
        assert_eq!(nodes.len(), 6);
        assert_eq!(nodes[0], vec![-1.0, -1.0]);
        assert!(nodes.contains(&vec![1.0, -1.0]));
        assert!(nodes.contains(&vec![-1.0, 1.0]));
        assert!(nodes.contains(&vec![0.0, -1.0]));

        let nodes = equispaced_simplex_nodes(3, 3);
        assert_eq!(nodes.len(), 20);
        for p in &nodes {
            assert!(p.iter().sum::<f64>() <= -1.0 + 1e-12, "Outside tetrahedron: {:?}", p);
        }

        let centroid = equispaced_simplex_nodes(3, 0);
        assert_eq!(centroid, vec![vec![-0.5; 3]]);
    }

    #[test]
    fn test_warp_blend_nodes_inside_triangle() {
        for order in 0..=8 {
            let nodes = warp_blend_triangle_nodes(order);
            assert_eq!(nodes.len(), (order + 1) * (order + 2) / 2);
            for &[r, s] in &nodes {
                assert!(r >= -1.0 - 1e-12 && s >= -1.0 - 1e-12 && r + s <= 1e-12);
            }
        }
    }

    #[test]
    fn test_warp_blend_edges_are_gll() {
        // Nodes on the edge s = -1 follow the 1D GLL distribution
        let order = 5;
        let gll = gauss_lobatto_nodes(order);
        let mut edge: Vec<f64> = warp_blend_triangle_nodes(order)
            .into_iter()
            .filter(|p| (p[1] + 1.0).abs() < 1e-12)
            .map(|p| p[0])
            .collect();
        edge.sort_by(|a, b| a.total_cmp(b));

        assert_eq!(edge.len(), order + 1);
        for (x, g) in edge.iter().zip(&gll) {
            assert!((x - g).abs() < 1e-12, "edge node {} vs GLL {}", x, g);
        }
    }
}
