//! Nodal storage for one field on one element group.

use crate::error::{FilterError, Result};

/// Nodal values of one scalar field on one element group.
///
/// Stores nodal values in a contiguous row-major array with layout
/// [n_elements, n_nodes]. Access via `element(k)` to get a slice of nodal
/// values for element k.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupArray {
    /// Nodal values, stored as data[k * n_nodes + i] for element k, node i
    data: Vec<f64>,
    /// Number of elements
    n_elements: usize,
    /// Number of nodes per element
    n_nodes: usize,
}

impl GroupArray {
    /// Create a new storage block initialized to zero.
    pub fn zeros(n_elements: usize, n_nodes: usize) -> Self {
        Self {
            data: vec![0.0; n_elements * n_nodes],
            n_elements,
            n_nodes,
        }
    }

    /// Wrap existing row-major data.
    ///
    /// Fails with [`FilterError::ShapeMismatch`] if `data.len()` is not
    /// `n_elements * n_nodes`.
    pub fn from_vec(n_elements: usize, n_nodes: usize, data: Vec<f64>) -> Result<Self> {
        let expected = n_elements * n_nodes;
        if data.len() != expected {
            return Err(FilterError::shape_mismatch(
                format!("group array of {} x {}", n_elements, n_nodes),
                expected,
                data.len(),
            ));
        }
        Ok(Self {
            data,
            n_elements,
            n_nodes,
        })
    }

    /// Number of elements.
    pub fn n_elements(&self) -> usize {
        self.n_elements
    }

    /// Number of nodes per element.
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    /// Get the nodal values for element k.
    pub fn element(&self, k: usize) -> &[f64] {
        let start = k * self.n_nodes;
        &self.data[start..start + self.n_nodes]
    }

    /// Get mutable nodal values for element k.
    pub fn element_mut(&mut self, k: usize) -> &mut [f64] {
        let start = k * self.n_nodes;
        &mut self.data[start..start + self.n_nodes]
    }

    /// Row-major view of all nodal values.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major view of all nodal values.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the block and return its row-major data.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Maximum absolute nodal value (0 for an empty block).
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0f64, |acc, &v| acc.max(v.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let mut block = GroupArray::zeros(3, 2);
        assert_eq!(block.as_slice().len(), 6);

        block.element_mut(1).copy_from_slice(&[4.0, -5.0]);
        assert_eq!(block.element(0), &[0.0, 0.0]);
        assert_eq!(block.element(1), &[4.0, -5.0]);
        assert_eq!(block.as_slice()[2..4], [4.0, -5.0]);
        assert_eq!(block.max_abs(), 5.0);
    }

    #[test]
    fn test_from_vec_checks_length() {
        let block = GroupArray::from_vec(2, 3, vec![1.0; 6]).unwrap();
        assert_eq!(block.n_elements(), 2);
        assert_eq!(block.n_nodes(), 3);

        let err = GroupArray::from_vec(2, 3, vec![1.0; 5]).unwrap_err();
        assert!(matches!(
            err,
            FilterError::ShapeMismatch {
                expected: 6,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_block() {
        let block = GroupArray::zeros(0, 4);
        assert!(block.as_slice().is_empty());
        assert_eq!(block.max_abs(), 0.0);
    }
}
