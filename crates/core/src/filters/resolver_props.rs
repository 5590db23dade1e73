//! Property-based tests for DependencyResolver.
//!
//! Narrowed operator lists must be exactly the operators of the selected
//! units, and the operator dispatch never survives a unit change.

use proptest::prelude::*;

use deptboard_shared::types::{OperatorId, UnitId};

use super::constraint::Constraint;
use super::options::{OperatorOption, option_ids};
use super::resolver::{DependencyResolver, Resolution};
use super::types::OperatorsFilter;

/// Strategy for an operator universe over units 10, 20, 30, 40.
fn arb_operators() -> impl Strategy<Value = Vec<OperatorOption>> {
    prop::collection::vec(
        prop::sample::subsequence(vec![10_u64, 20, 30, 40], 0..=4),
        0..12,
    )
    .prop_map(|memberships| {
        memberships
            .into_iter()
            .enumerate()
            .map(|(i, units)| OperatorOption {
                value: OperatorId(i as u64 + 1),
                label: format!("op-{}", i + 1),
                unit_ids: units.into_iter().map(UnitId).collect(),
            })
            .collect()
    })
}

/// Strategy for a non-empty unit selection, possibly including unknown units.
fn arb_units() -> impl Strategy<Value = Vec<UnitId>> {
    prop::collection::vec(prop::sample::select(vec![10_u64, 20, 30, 40, 50]), 1..4)
        .prop_map(|ids| ids.into_iter().map(UnitId).collect())
}

fn loaded(all: &[OperatorOption]) -> OperatorsFilter {
    let mut filter = OperatorsFilter::default();
    filter.select.options = all.to_vec();
    filter.select.selected_value = all.to_vec();
    filter.all_options = all.to_vec();
    filter
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Narrowed options are exactly the operators sharing a unit with the selection.
    #[test]
    fn prop_narrowing_is_exact(all in arb_operators(), units in arb_units()) {
        let previous = loaded(&all);
        let resolution = DependencyResolver::resolve(&Constraint::Only(units.clone()), &previous);
        let Resolution::Narrowed(filter) = resolution else {
            return Err(TestCaseError::fail("expected Narrowed"));
        };

        let expected: Vec<OperatorId> = all
            .iter()
            .filter(|o| o.unit_ids.iter().any(|u| units.contains(u)))
            .map(|o| o.value)
            .collect();
        prop_assert_eq!(option_ids(&filter.select.options), expected);
        prop_assert!(filter.select.options.iter().all(|o| all.contains(o)));
        prop_assert!(filter.select.value_for_dispatch.is_unconstrained());
        prop_assert_eq!(&filter.all_options, &all);
    }

    /// Narrowed selection is either the narrowed list or the untouched previous selection.
    #[test]
    fn prop_selection_is_narrowed_or_preserved(
        all in arb_operators(),
        units in arb_units(),
        keep in prop::collection::vec(any::<bool>(), 12),
    ) {
        let mut previous = loaded(&all);
        previous.select.selected_value = all
            .iter()
            .zip(keep.iter())
            .filter(|(_, k)| **k)
            .map(|(o, _)| o.clone())
            .collect();

        let filter = DependencyResolver::resolve(&Constraint::Only(units), &previous)
            .into_filter()
            .unwrap();
        prop_assert!(
            filter.select.selected_value == filter.select.options
                || filter.select.selected_value == previous.select.selected_value
        );
    }

    /// Unconstrained units always restore the full operator list.
    #[test]
    fn prop_reset_restores_full_list(all in arb_operators(), units in arb_units()) {
        let narrowed = DependencyResolver::resolve(&Constraint::Only(units), &loaded(&all))
            .into_filter()
            .unwrap();
        let reset = DependencyResolver::resolve(&Constraint::Unconstrained, &narrowed)
            .into_filter()
            .unwrap();
        prop_assert_eq!(&reset.select.options, &all);
        prop_assert_eq!(&reset.select.selected_value, &all);
        prop_assert!(reset.select.value_for_dispatch.is_unconstrained());
    }
}
