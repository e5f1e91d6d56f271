//! Element groups defined by explicit nodes and a basis closure.

use std::fmt;
use std::sync::Arc;

use super::group::ElementGroup;

/// Basis evaluator: `(mode, point) -> value`.
pub type BasisFn = Arc<dyn Fn(usize, &[f64]) -> f64 + Send + Sync>;

/// Element group with caller-supplied reference nodes and basis.
///
/// Lets a third-party discretization (or a synthetic test case) plug into
/// the filter without implementing [`ElementGroup`] by hand.
#[derive(Clone)]
pub struct NodalGroup {
    dim: usize,
    n_elements: usize,
    n_modes: usize,
    nodes: Vec<Vec<f64>>,
    basis: BasisFn,
}

impl NodalGroup {
    /// Create a group from reference nodes, a mode count and a basis closure.
    ///
    /// # Panics
    /// Panics if a node does not have `dim` coordinates.
    pub fn new<F>(dim: usize, nodes: Vec<Vec<f64>>, n_modes: usize, n_elements: usize, basis: F) -> Self
    where
        F: Fn(usize, &[f64]) -> f64 + Send + Sync + 'static,
    {
        assert!(
            nodes.iter().all(|p| p.len() == dim),
            "All nodes must have {} coordinates",
            dim
        );

        Self {
            dim,
            n_elements,
            n_modes,
            nodes,
            basis: Arc::new(basis),
        }
    }
}

impl fmt::Debug for NodalGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodalGroup")
            .field("dim", &self.dim)
            .field("n_elements", &self.n_elements)
            .field("n_nodes", &self.nodes.len())
            .field("n_modes", &self.n_modes)
            .finish()
    }
}

impl ElementGroup for NodalGroup {
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
        self.n_modes
    }

    fn unit_node(&self, i: usize) -> &[f64] {
        &self.nodes[i]
    }

    fn evaluate_basis(&self, mode: usize, point: &[f64]) -> f64 {
        (self.basis)(mode, point)
    }

    fn name(&self) -> &'static str {
        "nodal"
    }
}
