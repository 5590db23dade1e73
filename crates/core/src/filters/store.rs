//! Filter store: the owned filter state and its transitions.
//!
//! Transitions are total. Degenerate payloads (unknown ids, empty lists,
//! reversed date bounds) are normalized instead of rejected, and each call
//! leaves the state consistent before returning.

use chrono::NaiveDate;
use tracing::debug;

use deptboard_shared::DefaultDateRange;
use deptboard_shared::types::{OperatorId, SiteId, UnitId};

use crate::lookup::{LookupResponse, OperatorRecord, UnitRecord};

use super::constraint::Constraint;
use super::date::{day_end, day_start};
use super::options::{FilterOption, operator_options, unit_options};
use super::resolver::{DependencyResolver, Resolution};
use super::types::{DateRange, FilterState, MultiSelect, Selector};

/// Owned filter state with named transitions.
#[derive(Debug, Clone)]
pub struct FilterStore {
    state: FilterState,
    default_range: DateRange,
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new(DateRange::blank())
    }
}

impl FilterStore {
    /// Creates a store whose date range starts at, and returns to, `default_range`.
    #[must_use]
    pub fn new(default_range: DateRange) -> Self {
        Self {
            state: FilterState::initial(default_range.clone()),
            default_range,
        }
    }

    /// Creates a store from a configured default-range policy.
    #[must_use]
    pub fn with_policy(policy: DefaultDateRange, today: NaiveDate) -> Self {
        let default_range = match policy {
            DefaultDateRange::None => DateRange::blank(),
            DefaultDateRange::MonthToDate => DateRange::month_to_date(today),
        };
        Self::new(default_range)
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Returns the date range applied on site change.
    #[must_use]
    pub fn default_range(&self) -> &DateRange {
        &self.default_range
    }

    /// Selects a site.
    ///
    /// Unit and operator dispatch values and the date range are invalidated
    /// before the new site's option universe is known; option lists stay
    /// until [`FilterStore::set_filters`] replaces them.
    pub fn set_site(&mut self, site_id: SiteId) {
        let previous_units = self.state.units.value_for_dispatch.clone();

        self.state.site.selected_value = Some(site_id);
        self.state.site.value_for_dispatch = site_id;
        self.state.site.changed = true;

        self.state.units.value_for_dispatch = Constraint::Unconstrained;
        self.state.units.changed = true;
        self.state.operators.select.value_for_dispatch = Constraint::Unconstrained;
        self.state.operators.select.changed = true;

        self.state.date = DateRange {
            changed: true,
            ..self.default_range.clone()
        };
        self.state.is_filters_exist = true;
        self.state.is_need_date_reset = false;

        debug!(site_id = %site_id, "site selected");
        self.resolve_operators(&previous_units);
    }

    /// Installs the option universe returned by the lookup for the current site.
    ///
    /// Everything starts selected, which dispatches as "no constraint".
    pub fn set_filters(
        &mut self,
        units: &[UnitRecord],
        operators: &[OperatorRecord],
        min_date: &str,
    ) {
        let unit_options = unit_options(units);
        let operator_options = operator_options(operators);

        debug!(
            units = unit_options.len(),
            operators = operator_options.len(),
            min_date,
            "filters installed"
        );

        self.state.units.selected_value.clone_from(&unit_options);
        self.state.units.options = unit_options;
        self.state.operators.select.selected_value.clone_from(&operator_options);
        self.state.operators.select.options.clone_from(&operator_options);
        self.state.operators.all_options = operator_options;
        self.state.min_date = min_date.to_string();
    }

    /// Installs a full lookup response.
    pub fn apply_lookup_response(&mut self, response: &LookupResponse) {
        self.set_filters(&response.units, &response.operators, &response.min_date);
    }

    /// Sets the date range.
    ///
    /// `date_from` becomes a day-start bound and `date_to` a day-end bound;
    /// a missing `date_to` leaves the range open-ended. Reversed bounds are
    /// swapped.
    pub fn set_date(&mut self, date_from: NaiveDate, date_to: Option<NaiveDate>) {
        let (from, to) = match date_to {
            Some(to) if to < date_from => (to, Some(date_from)),
            _ => (date_from, date_to),
        };

        self.state.date = DateRange {
            created_from: day_start(from),
            created_to: to.map(day_end),
            changed: true,
        };

        debug!(
            created_from = %self.state.date.created_from,
            created_to = ?self.state.date.created_to,
            "date range selected"
        );
    }

    /// Sets the selection of a multi-select from raw ids.
    ///
    /// Ids missing from the current options are ignored. A unit change is
    /// followed by a resolver pass over the operators.
    pub fn set_options(&mut self, which: Selector, ids: &[u64]) {
        match which {
            Selector::Units => {
                let ids: Vec<UnitId> = ids.iter().copied().map(UnitId).collect();
                self.select_units(&ids);
            }
            Selector::Operators => {
                let ids: Vec<OperatorId> = ids.iter().copied().map(OperatorId).collect();
                self.select_operators(&ids);
            }
        }
    }

    /// Sets the unit selection and rescopes the operators.
    pub fn select_units(&mut self, ids: &[UnitId]) {
        let previous_units = self.state.units.value_for_dispatch.clone();
        self.state.units.select_ids(ids);
        debug!(
            selected = self.state.units.selected_value.len(),
            of = self.state.units.options.len(),
            "units selected"
        );
        self.resolve_operators(&previous_units);
    }

    /// Sets the operator selection.
    pub fn select_operators(&mut self, ids: &[OperatorId]) {
        self.state.operators.select.select_ids(ids);
        debug!(
            selected = self.state.operators.select.selected_value.len(),
            of = self.state.operators.select.options.len(),
            "operators selected"
        );
    }

    /// Resets every filter.
    ///
    /// Option lists are kept; the date range is blanked and the date widget
    /// is asked to reset.
    pub fn clear_filters(&mut self) {
        let previous_units = self.state.units.value_for_dispatch.clone();

        self.state.site = FilterState::default().site;
        self.state.date = DateRange::blank();
        reset_multi_select(&mut self.state.units);
        reset_multi_select(&mut self.state.operators.select);
        self.state.is_filters_exist = false;
        self.state.is_need_date_reset = true;

        debug!("filters cleared");
        self.resolve_operators(&previous_units);
    }

    /// Runs the resolver if the unit dispatch value moved away from `previous_units`.
    fn resolve_operators(&mut self, previous_units: &Constraint<UnitId>) {
        let units = &self.state.units.value_for_dispatch;
        if units == previous_units {
            return;
        }

        let resolution = DependencyResolver::resolve(units, &self.state.operators);
        match &resolution {
            Resolution::Narrowed(filter) => debug!(
                operators = filter.select.options.len(),
                "operators narrowed to selected units"
            ),
            Resolution::Reset(_) => debug!("operators reset to full list"),
            Resolution::Unchanged => {}
        }
        if let Some(filter) = resolution.into_filter() {
            self.state.operators = filter;
        }
    }
}

fn reset_multi_select<O: FilterOption>(filter: &mut MultiSelect<O>) {
    filter.value_for_dispatch = Constraint::Unconstrained;
    filter.changed = false;
}
