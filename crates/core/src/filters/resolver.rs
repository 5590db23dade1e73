//! Operator scoping by unit selection.
//!
//! The operator list offered to the user always follows the unit selection:
//! only operators belonging to at least one selected unit stay selectable.

use deptboard_shared::types::UnitId;

use super::constraint::Constraint;
use super::options::{OperatorOption, same_ids};
use super::types::OperatorsFilter;

/// Result of a resolver pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Operators were narrowed to the selected units.
    Narrowed(OperatorsFilter),
    /// Operators were reset to the full list of the site.
    Reset(OperatorsFilter),
    /// Nothing to recompute.
    Unchanged,
}

impl Resolution {
    /// Returns the new operators filter, if the pass produced one.
    #[must_use]
    pub fn into_filter(self) -> Option<OperatorsFilter> {
        match self {
            Self::Narrowed(filter) | Self::Reset(filter) => Some(filter),
            Self::Unchanged => None,
        }
    }
}

/// Stateless resolver deriving operator options from the unit constraint.
pub struct DependencyResolver;

impl DependencyResolver {
    /// Recomputes the operators filter for a unit constraint.
    ///
    /// # Arguments
    /// * `units` - The unit ids dispatched downstream
    /// * `previous` - The operators filter before the unit change
    ///
    /// # Returns
    /// * `Resolution::Narrowed` for a non-empty unit list. The operator
    ///   dispatch is dropped; the previous selection survives only if the
    ///   narrowed list has the size of the previous options and the same ids
    ///   as the previous selection.
    /// * `Resolution::Reset` when units are unconstrained
    /// * `Resolution::Unchanged` for an explicit empty list
    #[must_use]
    pub fn resolve(units: &Constraint<UnitId>, previous: &OperatorsFilter) -> Resolution {
        match units {
            Constraint::Only(ids) if !ids.is_empty() => {
                let narrowed = Self::operators_for_units(&previous.all_options, ids);
                let keep_selection = narrowed.len() == previous.select.options.len()
                    && same_ids(&narrowed, &previous.select.selected_value);

                let mut next = previous.clone();
                if !keep_selection {
                    next.select.selected_value.clone_from(&narrowed);
                }
                next.select.options = narrowed;
                next.select.value_for_dispatch = Constraint::Unconstrained;
                Resolution::Narrowed(next)
            }
            Constraint::Only(_) => Resolution::Unchanged,
            Constraint::Unconstrained => {
                let mut next = previous.clone();
                next.select.options.clone_from(&previous.all_options);
                next.select.selected_value.clone_from(&previous.all_options);
                next.select.value_for_dispatch = Constraint::Unconstrained;
                Resolution::Reset(next)
            }
        }
    }

    /// Returns the operators belonging to at least one of `units`, in list order.
    #[must_use]
    pub fn operators_for_units(all: &[OperatorOption], units: &[UnitId]) -> Vec<OperatorOption> {
        all.iter()
            .filter(|operator| operator.belongs_to_any(units))
            .cloned()
            .collect()
    }
}
