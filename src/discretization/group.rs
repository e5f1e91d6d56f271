//! Trait definition for element groups.

/// A homogeneous batch of elements sharing one basis and one node layout.
///
/// This is the interface the filter consumes from a discretization. The
/// filter never mutates a group; it only reads counts, reference nodes and
/// basis values while building operators.
///
/// # Implementation Notes
///
/// - `n_nodes` rows and `n_modes` columns make up the group's Vandermonde
///   matrix; a unisolvent group has `n_nodes == n_modes`
/// - Mode indices should grow with polynomial degree, since spectral
///   filters damp by mode index
///
/// # Extending
///
/// To filter fields of a custom discretization:
/// 1. Implement `ElementGroup` for each kind of group (or use
///    [`NodalGroup`](super::NodalGroup) with a basis closure)
/// 2. Collect the groups, in order, into a [`Discretization`](super::Discretization)
pub trait ElementGroup: Send + Sync {
    /// Reference-space dimension.
    fn dim(&self) -> usize;

    /// Number of elements in the group.
    fn n_elements(&self) -> usize;

    /// Number of interpolation nodes per element.
    fn n_nodes(&self) -> usize;

    /// Number of basis functions.
    fn n_modes(&self) -> usize {
        self.n_nodes()
    }

    /// Reference coordinates of node `i` (length `dim()`).
    fn unit_node(&self, i: usize) -> &[f64];

    /// Evaluate basis function `mode` at a reference point.
    fn evaluate_basis(&self, mode: usize, point: &[f64]) -> f64;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Type alias for boxed element group (runtime polymorphism).
pub type BoxedGroup = Box<dyn ElementGroup>;
