//! Simplex element groups with the orthonormal PKDO basis.

use super::group::ElementGroup;
use crate::polynomial::{
    equispaced_simplex_nodes, gauss_lobatto_nodes, simplex_basis, simplex_mode_degrees,
    warp_blend_triangle_nodes,
};

/// Group of simplex elements (intervals, triangles or tetrahedra).
///
/// The basis is the orthonormal PKDO family of total degree ≤ `order`,
/// graded by degree. Default nodes are:
/// - 1D: Gauss-Lobatto-Legendre
/// - 2D: warp-and-blend
/// - 3D: equispaced
#[derive(Clone, Debug)]
pub struct SimplexGroup {
    dim: usize,
    order: usize,
    n_elements: usize,
    nodes: Vec<Vec<f64>>,
    modes: Vec<Vec<usize>>,
}

impl SimplexGroup {
    /// Create a group of `n_elements` simplices of the given dimension and order.
    ///
    /// # Panics
    /// Panics if `dim` is not 1, 2 or 3.
    pub fn new(dim: usize, order: usize, n_elements: usize) -> Self {
        let nodes = match dim {
            1 => gauss_lobatto_nodes(order)
                .into_iter()
                .map(|r| vec![r])
                .collect(),
            2 => warp_blend_triangle_nodes(order)
                .into_iter()
                .map(|p| p.to_vec())
                .collect(),
            3 => equispaced_simplex_nodes(3, order),
            _ => panic!("Simplex groups support dimensions 1-3, got {}", dim),
        };
        Self::with_nodes(dim, order, n_elements, nodes)
    }

    /// Create a group with caller-supplied reference nodes.
    ///
    /// The node count need not match the basis count; a mismatch is reported
    /// when a filter is built for the group.
    ///
    /// # Panics
    /// Panics if `dim` is not 1, 2 or 3, or a node has the wrong dimension.
    pub fn with_nodes(dim: usize, order: usize, n_elements: usize, nodes: Vec<Vec<f64>>) -> Self {
        assert!(
            (1..=3).contains(&dim),
            "Simplex groups support dimensions 1-3, got {}",
            dim
        );
        assert!(
            nodes.iter().all(|p| p.len() == dim),
            "All nodes must have {} coordinates",
            dim
        );

        Self {
            dim,
            order,
            n_elements,
            nodes,
            modes: simplex_mode_degrees(dim, order),
        }
    }

    /// Polynomial order of the basis.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Multi-index (degree per collapsed direction) of each mode.
    pub fn mode_degrees(&self) -> &[Vec<usize>] {
        &self.modes
    }
}

impl ElementGroup for SimplexGroup {
    fn dim(&self) -> usize {
        self.dim
    }

    fn n_elements(&self) -> usize {
        self.n_elements
    }

    fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn n_modes(&self) -> usize {
        self.modes.len()
    }

    fn unit_node(&self, i: usize) -> &[f64] {
        &self.nodes[i]
    }

    fn evaluate_basis(&self, mode: usize, point: &[f64]) -> f64 {
        simplex_basis(&self.modes[mode], point)
    }

    fn name(&self) -> &'static str {
        match self.dim {
            1 => "interval",
            2 => "triangle",
            _ => "tetrahedron",
        }
    }
}
