//! Property-based tests for FilterSession.
//!
//! Lookups are issued for random site switches and completed in random
//! order. Only the ticket for the site currently selected may ever land.

use proptest::prelude::*;

use deptboard_shared::types::{OperatorId, SiteId, UnitId};

use crate::lookup::{LookupError, LookupResponse, OperatorRecord, UnitRecord};

use super::service::FilterSession;
use super::types::{FilterAction, LookupOutcome, LookupTicket};

/// Each site gets a distinct unit so an applied response identifies its site.
fn response_for(site_id: SiteId) -> LookupResponse {
    let unit = UnitId(site_id.into_inner() * 100);
    LookupResponse {
        units: vec![UnitRecord {
            id: unit,
            name: format!("unit-{unit}"),
        }],
        operators: vec![OperatorRecord {
            id: OperatorId(site_id.into_inner()),
            name: format!("op-{site_id}"),
            unit_ids: vec![unit],
            unit_id: None,
        }],
        min_date: "2023-01-01".into(),
    }
}

#[derive(Debug, Clone)]
enum Step {
    Select(u64),
    Clear,
    /// Complete the in-flight lookup at this index (modulo the number in flight).
    Complete(usize, bool),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0_u64..5).prop_map(Step::Select),
        1 => Just(Step::Clear),
        3 => (any::<usize>(), any::<bool>()).prop_map(|(i, ok)| Step::Complete(i, ok)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Only responses for the dispatched site land, and options are editable only once they have.
    #[test]
    fn prop_applied_response_matches_current_site(steps in prop::collection::vec(arb_step(), 1..30)) {
        let mut session = FilterSession::default();
        let mut in_flight: Vec<LookupTicket> = Vec::new();
        let mut installed: Option<SiteId> = None;

        for step in steps {
            match step {
                Step::Select(id) => {
                    if let Some(ticket) = session.apply(FilterAction::SelectSite(SiteId(id))) {
                        in_flight.push(ticket);
                    }
                }
                Step::Clear => {
                    session.apply(FilterAction::Clear);
                }
                Step::Complete(index, ok) => {
                    if in_flight.is_empty() {
                        continue;
                    }
                    let ticket = in_flight.remove(index % in_flight.len());
                    let result = if ok {
                        Ok(response_for(ticket.site_id))
                    } else {
                        Err(LookupError::TimedOut { after_ms: 10 })
                    };
                    let current = session.state().site.value_for_dispatch;
                    let outcome = session.apply_lookup(ticket, result);

                    if outcome != LookupOutcome::Stale {
                        prop_assert_eq!(ticket.site_id, current);
                    }
                    if outcome == LookupOutcome::Applied {
                        installed = Some(ticket.site_id);
                    }
                }
            }

            if session.options_loaded() {
                prop_assert_eq!(installed, Some(session.state().site.value_for_dispatch));
            } else {
                let controls = session.controls();
                prop_assert!(!controls.units.enabled && !controls.operators.enabled);
                prop_assert!(!controls.date.enabled);
            }

            let options = &session.state().units.options;
            match installed {
                Some(site) => {
                    let unit = UnitId(site.into_inner() * 100);
                    prop_assert!(options.iter().all(|o| o.value == unit));
                }
                None => prop_assert!(options.is_empty()),
            }
        }
    }

    /// At most one lookup is pending and it always targets the dispatched site.
    #[test]
    fn prop_pending_ticket_tracks_site(steps in prop::collection::vec(arb_step(), 1..30)) {
        let mut session = FilterSession::default();
        for step in steps {
            match step {
                Step::Select(id) => {
                    session.apply(FilterAction::SelectSite(SiteId(id)));
                }
                Step::Clear => {
                    session.apply(FilterAction::Clear);
                }
                Step::Complete(..) => {
                    if let Some(ticket) = session.pending() {
                        session.apply_lookup(ticket, Ok(response_for(ticket.site_id)));
                    }
                }
            }

            if let Some(ticket) = session.pending() {
                prop_assert_eq!(ticket.site_id, session.state().site.value_for_dispatch);
                prop_assert!(!ticket.site_id.is_none());
            }
        }
    }
}
