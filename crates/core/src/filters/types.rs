//! Filter state types.
//!
//! Every filter separates what the user sees (`selected_value`) from what is
//! sent to the report query (`value_for_dispatch`), and carries a `changed`
//! flag recording that it was touched since the last clear.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use deptboard_shared::types::{OperatorId, SiteId, UnitId};

use super::constraint::Constraint;
use super::date::{day_end, day_start, first_of_month};
use super::options::{FilterOption, OperatorOption, UnitOption, option_ids, pick};

/// Site filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSelection {
    /// Site shown as selected, if any.
    pub selected_value: Option<SiteId>,
    /// Site sent downstream; [`SiteId::NONE`] when nothing is chosen.
    pub value_for_dispatch: SiteId,
    /// Touched since the last clear.
    pub changed: bool,
}

/// Date range filter.
///
/// Both bounds are preformatted text. An empty `created_from` and an absent
/// `created_to` mean "unbounded" on that side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Lower bound, `YYYY-MM-DD 00:00:00`.
    pub created_from: String,
    /// Upper bound, `YYYY-MM-DD 23:59:59`.
    pub created_to: Option<String>,
    /// Touched since the last clear.
    pub changed: bool,
}

impl DateRange {
    /// Blank range with no bounds.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// From the first day of `today`'s month to the end of `today`.
    #[must_use]
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            created_from: day_start(first_of_month(today)),
            created_to: Some(day_end(today)),
            changed: false,
        }
    }

    /// Returns the lower bound, or `None` when unbounded.
    #[must_use]
    pub fn from_bound(&self) -> Option<&str> {
        Some(self.created_from.as_str()).filter(|s| !s.is_empty())
    }

    /// Returns the upper bound, or `None` when unbounded.
    #[must_use]
    pub fn to_bound(&self) -> Option<&str> {
        self.created_to.as_deref().filter(|s| !s.is_empty())
    }
}

/// Multi-select filter shared by units and operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSelect<O: FilterOption> {
    /// Currently selectable options.
    pub options: Vec<O>,
    /// Currently chosen options.
    pub selected_value: Vec<O>,
    /// Ids sent downstream.
    pub value_for_dispatch: Constraint<O::Id>,
    /// Touched since the last clear.
    pub changed: bool,
}

impl<O: FilterOption> Default for MultiSelect<O> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            selected_value: Vec::new(),
            value_for_dispatch: Constraint::Unconstrained,
            changed: false,
        }
    }
}

impl<O: FilterOption> MultiSelect<O> {
    /// Replaces the selection with the options matching `ids`.
    ///
    /// Unknown ids are dropped. The dispatch value is normalized so that an
    /// empty or complete selection means no constraint.
    pub fn select_ids(&mut self, ids: &[O::Id]) {
        let selection = pick(&self.options, ids);
        self.value_for_dispatch =
            Constraint::normalize(option_ids(&selection), self.options.len());
        self.selected_value = selection;
        self.changed = true;
    }
}

/// Units filter.
pub type UnitsFilter = MultiSelect<UnitOption>;

/// Operators filter.
///
/// Keeps the full operator list of the current site so `options` can be
/// re-derived whenever the unit selection changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorsFilter {
    /// Selectable, selected and dispatched operators.
    #[serde(flatten)]
    pub select: MultiSelect<OperatorOption>,
    /// Every operator of the current site.
    pub all_options: Vec<OperatorOption>,
}

/// Complete filter state of the report screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Site filter.
    pub site: SiteSelection,
    /// Date range filter.
    pub date: DateRange,
    /// Units filter.
    pub units: UnitsFilter,
    /// Operators filter.
    pub operators: OperatorsFilter,
    /// A site is chosen; gates the date, unit and operator controls.
    pub is_filters_exist: bool,
    /// Asks the date widget to visually reset.
    pub is_need_date_reset: bool,
    /// Earliest selectable date for the current site; empty when unknown.
    pub min_date: String,
}

impl FilterState {
    /// Initial state: no site, `date` as the default range, empty option lists.
    #[must_use]
    pub fn initial(date: DateRange) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    /// Returns true if any filter was touched since the last clear.
    #[must_use]
    pub fn filters_changed(&self) -> bool {
        self.site.changed
            || self.date.changed
            || self.units.changed
            || self.operators.select.changed
    }

    /// Unit ids sent downstream.
    #[must_use]
    pub fn unit_dispatch(&self) -> &Constraint<UnitId> {
        &self.units.value_for_dispatch
    }

    /// Operator ids sent downstream.
    #[must_use]
    pub fn operator_dispatch(&self) -> &Constraint<OperatorId> {
        &self.operators.select.value_for_dispatch
    }
}

/// Which multi-select an option selection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    /// Units filter.
    Units,
    /// Operators filter.
    Operators,
}

impl Selector {
    /// Returns the string representation of the selector.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Units => "units",
            Self::Operators => "operators",
        }
    }

    /// Parses a selector from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "units" => Some(Self::Units),
            "operators" => Some(Self::Operators),
            _ => None,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
