//! Property-based tests for FilterStore.
//!
//! Random action sequences are replayed the way the screen drives the store:
//! a site change is always followed by the lookup result for that site.

use proptest::prelude::*;

use chrono::NaiveDate;
use deptboard_shared::types::{OperatorId, SiteId, UnitId};

use crate::lookup::{OperatorRecord, UnitRecord};

use super::constraint::Constraint;
use super::store::FilterStore;
use super::types::Selector;

#[derive(Debug, Clone)]
enum Action {
    Site(u64),
    Units(Vec<u64>),
    Operators(Vec<u64>),
    Date(u32, Option<u32>),
    Clear,
}

fn unit_records() -> Vec<UnitRecord> {
    [10, 20, 30]
        .into_iter()
        .map(|id| UnitRecord {
            id: UnitId(id),
            name: format!("unit-{id}"),
        })
        .collect()
}

fn operator_records() -> Vec<OperatorRecord> {
    [
        (1, vec![10]),
        (2, vec![20]),
        (3, vec![10, 20]),
        (4, vec![30]),
        (5, vec![]),
        (6, vec![20, 30]),
    ]
    .into_iter()
    .map(|(id, units)| OperatorRecord {
        id: OperatorId(id),
        name: format!("op-{id}"),
        unit_ids: units.into_iter().map(UnitId).collect(),
        unit_id: None,
    })
    .collect()
}

fn arb_ids(max: u64) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0..=max, 0..8)
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (1_u64..4).prop_map(Action::Site),
        arb_ids(35).prop_map(Action::Units),
        arb_ids(7).prop_map(Action::Operators),
        (0_u32..365, prop::option::of(0_u32..365)).prop_map(|(f, t)| Action::Date(f, t)),
        Just(Action::Clear),
    ]
}

fn day(offset: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(u64::from(offset))
}

fn apply(store: &mut FilterStore, action: &Action) {
    match action {
        Action::Site(id) => {
            store.set_site(SiteId(*id));
            store.set_filters(&unit_records(), &operator_records(), "2023-01-01");
        }
        Action::Units(ids) => store.set_options(Selector::Units, ids),
        Action::Operators(ids) => store.set_options(Selector::Operators, ids),
        Action::Date(from, to) => store.set_date(day(*from), to.map(day)),
        Action::Clear => store.clear_filters(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A selection dispatches no constraint iff it is empty or complete.
    #[test]
    fn prop_full_or_empty_selection_is_unconstrained(ids in arb_ids(35)) {
        let mut store = FilterStore::default();
        apply(&mut store, &Action::Site(1));
        store.set_options(Selector::Units, &ids);

        let units = &store.state().units;
        let size = units.selected_value.len();
        let expect_unconstrained = size == 0 || size == units.options.len();
        prop_assert_eq!(units.value_for_dispatch.is_unconstrained(), expect_unconstrained);
    }

    /// Selecting the same full set twice dispatches no constraint both times.
    #[test]
    fn prop_full_selection_is_idempotent(repeats in 1_usize..4) {
        let mut store = FilterStore::default();
        apply(&mut store, &Action::Site(1));
        for _ in 0..repeats {
            store.set_options(Selector::Units, &[10, 20, 30]);
            prop_assert!(store.state().unit_dispatch().is_unconstrained());
        }
    }

    /// Operator options stay a subset of the site's operators, scoped to the selected units.
    #[test]
    fn prop_operator_options_follow_units(actions in prop::collection::vec(arb_action(), 1..20)) {
        let mut store = FilterStore::default();
        for action in &actions {
            apply(&mut store, action);

            let state = store.state();
            let operators = &state.operators;
            prop_assert!(operators.select.options.iter().all(|o| operators.all_options.contains(o)));

            if let Constraint::Only(units) = state.unit_dispatch() {
                prop_assert!(operators.select.options.iter().all(|o| o.belongs_to_any(units)));
            }
        }
    }

    /// A site change always invalidates unit, operator and date filters.
    #[test]
    fn prop_site_switch_cascade(
        actions in prop::collection::vec(arb_action(), 0..12),
        site in 1_u64..100,
    ) {
        let mut store = FilterStore::default();
        for action in &actions {
            apply(&mut store, action);
        }
        store.set_site(SiteId(site));

        let state = store.state();
        prop_assert!(state.unit_dispatch().is_unconstrained());
        prop_assert!(state.operator_dispatch().is_unconstrained());
        prop_assert_eq!(&state.date.created_from, "");
        prop_assert!(state.date.changed && state.units.changed && state.operators.select.changed);
        prop_assert!(state.is_filters_exist);
    }

    /// Clearing always ends with nothing changed and the date widget reset.
    #[test]
    fn prop_clear_resets_changed_flags(actions in prop::collection::vec(arb_action(), 0..12)) {
        let mut store = FilterStore::default();
        for action in &actions {
            apply(&mut store, action);
        }
        store.clear_filters();

        let state = store.state();
        prop_assert!(!state.filters_changed());
        prop_assert!(state.site.value_for_dispatch.is_none());
        prop_assert!(!state.is_filters_exist);
        prop_assert!(state.is_need_date_reset);
    }
}
