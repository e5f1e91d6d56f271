//! Filter application over all groups of a discretization.

use super::config::FilterConfig;
use super::modal::ModalFilter;
use super::nodal::{NodalFilterOperator, OperatorCache};
use crate::discretization::Discretization;
use crate::error::{FilterError, Result};
use crate::field::FieldArray;
use crate::kernel::ExecutionContext;
use crate::types::GroupIndex;

/// Shape record of one filtered group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupFilter {
    /// Position of the group in the discretization
    pub index: GroupIndex,
    /// Elements in the group
    pub n_elements: usize,
    /// Nodes per element
    pub n_nodes: usize,
}

/// Exponential spectral filter bound to one discretization.
///
/// All nodal operators are built at construction; [`SpectralFilter::apply`]
/// only reads them, so one filter can be shared across threads.
///
/// # Example
///
/// ```
/// use dg_filter::{Discretization, ExecutionContext, FilterConfig, SimplexGroup, SpectralFilter};
///
/// let discr = Discretization::new().with_group(SimplexGroup::new(1, 4, 8));
/// let filter = SpectralFilter::from_config(&discr, &FilterConfig::new(1, 4, 3, 4)).unwrap();
///
/// let u = discr.field_from_fn(|_, _, r| 1.0 + r[0]);
/// let filtered = filter.apply(&ExecutionContext::default(), &[u.clone()]).unwrap();
/// assert!((filtered[0].max_abs() - u.max_abs()).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct SpectralFilter {
    modal: ModalFilter,
    cache: OperatorCache,
    groups: Vec<GroupFilter>,
}

impl SpectralFilter {
    /// Build the nodal operator of every group of `discr`.
    ///
    /// # Errors
    /// - [`FilterError::ShapeMismatch`] if a group's mode count differs from
    ///   `modal.npol()`
    /// - [`FilterError::SingularBasis`] if a group's Vandermonde matrix is
    ///   not invertible
    pub fn new(discr: &Discretization, modal: &ModalFilter) -> Result<Self> {
        let cache = OperatorCache::build(discr, modal)?;
        let groups: Vec<GroupFilter> = discr
            .groups()
            .map(|(index, group)| GroupFilter {
                index,
                n_elements: group.n_elements(),
                n_nodes: group.n_nodes(),
            })
            .collect();

        let config = modal.config();
        log::info!(
            "Spectral filter ready: {} groups, {} modes, cutoff {}, filter order {}{}",
            groups.len(),
            modal.npol(),
            config.cutoff,
            config.filter_order,
            if modal.is_identity() { " (identity)" } else { "" }
        );

        Ok(Self {
            modal: modal.clone(),
            cache,
            groups,
        })
    }

    /// Build the modal filter from `config`, then the per-group operators.
    pub fn from_config(discr: &Discretization, config: &FilterConfig) -> Result<Self> {
        let modal = config.build()?;
        Self::new(discr, &modal)
    }

    /// Filter every field.
    ///
    /// Returns one new field per input, in input order. Inputs are not
    /// modified.
    ///
    /// # Errors
    /// [`FilterError::ShapeMismatch`] if any field disagrees with the
    /// discretization in group count, element count or node count. Nothing
    /// is computed in that case.
    pub fn apply(&self, ctx: &ExecutionContext, fields: &[FieldArray]) -> Result<Vec<FieldArray>> {
        if fields.is_empty() {
            return Ok(Vec::new());
        }

        for (f, field) in fields.iter().enumerate() {
            self.check_field(f, field)?;
        }

        let backend = ctx.backend();
        log::trace!(
            "Filtering {} fields over {} groups ({} backend)",
            fields.len(),
            self.groups.len(),
            backend.name()
        );

        let mut outputs: Vec<FieldArray> = fields.iter().map(FieldArray::zeros_like).collect();

        for record in &self.groups {
            let op = self.operator_for(record.index)?;
            for (input, output) in fields.iter().zip(outputs.iter_mut()) {
                backend.apply(
                    op.matrix(),
                    input.group(record.index).as_slice(),
                    output.group_mut(record.index).as_mut_slice(),
                    record.n_elements,
                );
            }
        }

        Ok(outputs)
    }

    /// Filter a single field.
    pub fn apply_field(&self, ctx: &ExecutionContext, field: &FieldArray) -> Result<FieldArray> {
        self.apply(ctx, std::slice::from_ref(field))?
            .pop()
            .ok_or_else(|| FilterError::shape_mismatch("filtered field count", 1, 0))
    }

    /// Nodal operator of group `g`.
    pub fn operator(&self, g: GroupIndex) -> Option<&NodalFilterOperator> {
        self.cache.get(g)
    }

    /// Per-group shape records, in group order.
    pub fn groups(&self) -> &[GroupFilter] {
        &self.groups
    }

    /// Number of groups.
    pub fn n_groups(&self) -> usize {
        self.groups.len()
    }

    /// Modal damping matrix the operators were built from.
    pub fn modal_filter(&self) -> &ModalFilter {
        &self.modal
    }

    fn operator_for(&self, g: GroupIndex) -> Result<&NodalFilterOperator> {
        self.cache
            .get(g)
            .ok_or_else(|| FilterError::shape_mismatch("operator table size", self.groups.len(), g.get()))
    }

    fn check_field(&self, f: usize, field: &FieldArray) -> Result<()> {
        if field.n_groups() != self.groups.len() {
            return Err(FilterError::shape_mismatch(
                format!("field {} group count", f),
                self.groups.len(),
                field.n_groups(),
            ));
        }

        for record in &self.groups {
            let op = self.operator_for(record.index)?;
            let block = field.group(record.index);
            if block.n_elements() != record.n_elements {
                return Err(FilterError::shape_mismatch(
                    format!("field {} group {} element count", f, record.index),
                    record.n_elements,
                    block.n_elements(),
                ));
            }
            if block.n_nodes() != op.n_in() {
                return Err(FilterError::shape_mismatch(
                    format!("field {} group {} node count", f, record.index),
                    op.n_in(),
                    block.n_nodes(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discretization::SimplexGroup;
    use crate::field::GroupArray;

    fn two_group_discr() -> Discretization {
        Discretization::new()
            .with_group(SimplexGroup::new(2, 3, 4))
            .with_group(SimplexGroup::with_nodes(
                2,
                3,
                2,
                crate::polynomial::equispaced_simplex_nodes(2, 3),
            ))
    }

    #[test]
    fn test_group_records() {
        let discr = two_group_discr();
        let filter = SpectralFilter::from_config(&discr, &FilterConfig::new(2, 3, 4, 2)).unwrap();

        assert_eq!(filter.n_groups(), 2);
        assert_eq!(
            filter.groups()[1],
            GroupFilter {
                index: GroupIndex::new(1),
                n_elements: 2,
                n_nodes: 10
            }
        );
        assert_eq!(filter.operator(GroupIndex::new(0)).unwrap().n_in(), 10);
        assert!(filter.operator(GroupIndex::new(2)).is_none());
        assert_eq!(filter.modal_filter().npol(), 10);
    }

    #[test]
    fn test_empty_field_set() {
        let discr = two_group_discr();
        let filter = SpectralFilter::from_config(&discr, &FilterConfig::new(2, 3, 4, 2)).unwrap();
        assert!(filter.apply(&ExecutionContext::default(), &[]).unwrap().is_empty());
    }

    #[test]
    fn test_zero_field_stays_zero() {
        let discr = two_group_discr();
        let filter = SpectralFilter::from_config(&discr, &FilterConfig::new(2, 3, 2, 2)).unwrap();
        let out = filter.apply_field(&ExecutionContext::default(), &discr.zeros()).unwrap();
        assert_eq!(out, discr.zeros());
    }

    #[test]
    fn test_group_count_mismatch() {
        let discr = two_group_discr();
        let filter = SpectralFilter::from_config(&discr, &FilterConfig::new(2, 3, 2, 2)).unwrap();
        let field = FieldArray::new(vec![GroupArray::zeros(4, 10)]);

        let err = filter.apply(&ExecutionContext::default(), &[field]).unwrap_err();
        assert!(matches!(
            err,
            FilterError::ShapeMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_mismatch_in_later_field_blocks_everything() {
        let discr = two_group_discr();
        let filter = SpectralFilter::from_config(&discr, &FilterConfig::new(2, 3, 2, 2)).unwrap();
        let good = discr.zeros();
        let bad = FieldArray::new(vec![GroupArray::zeros(4, 10), GroupArray::zeros(2, 6)]);

        let err = filter.apply(&ExecutionContext::default(), &[good, bad]).unwrap_err();
        match err {
            FilterError::ShapeMismatch {
                context,
                expected,
                actual,
            } => {
                assert!(context.contains("field 1 group G1 node count"), "{}", context);
                assert_eq!(expected, 10);
                assert_eq!(actual, 6);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_element_count_mismatch() {
        let discr = two_group_discr();
        let filter = SpectralFilter::from_config(&discr, &FilterConfig::new(2, 3, 2, 2)).unwrap();
        let field = FieldArray::new(vec![GroupArray::zeros(5, 10), GroupArray::zeros(2, 10)]);

        let err = filter.apply_field(&ExecutionContext::default(), &field).unwrap_err();
        assert!(matches!(
            err,
            FilterError::ShapeMismatch {
                expected: 4,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_filter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpectralFilter>();
    }
}
