//! Session domain types: user actions, lookup tickets and outcomes.

use chrono::NaiveDate;
use serde::Serialize;

use deptboard_shared::types::SiteId;

use crate::filters::Selector;

/// User action on the report screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Pick a site.
    SelectSite(SiteId),
    /// Pick a date range; `to` may be open-ended.
    SelectDateRange {
        /// Lower bound.
        from: NaiveDate,
        /// Upper bound.
        to: Option<NaiveDate>,
    },
    /// Pick units or operators by id.
    SelectOptions {
        /// Target multi-select.
        which: Selector,
        /// Chosen ids.
        ids: Vec<u64>,
    },
    /// Reset every filter.
    Clear,
}

impl FilterAction {
    /// Returns a short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectSite(_) => "select_site",
            Self::SelectDateRange { .. } => "select_date_range",
            Self::SelectOptions { .. } => "select_options",
            Self::Clear => "clear",
        }
    }

    /// Returns true for actions that edit the site's option lists or date range.
    #[must_use]
    pub fn edits_site_filters(&self) -> bool {
        matches!(
            self,
            Self::SelectDateRange { .. } | Self::SelectOptions { .. }
        )
    }
}

/// Tag of an issued lookup.
///
/// A response is only applied while its ticket still matches the session's
/// current site and generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LookupTicket {
    /// Site the lookup was issued for.
    pub site_id: SiteId,
    /// Session generation at issue time.
    pub generation: u64,
}

/// Result of feeding a lookup response back into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The response was installed.
    Applied,
    /// The site changed since the ticket was issued; the response was dropped.
    Stale,
    /// The lookup failed; state is unchanged and a notice was raised.
    Failed(Notice),
}

impl LookupOutcome {
    /// Returns a short name for logging and responses.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Stale => "stale",
            Self::Failed(_) => "failed",
        }
    }
}

/// Transient message for the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Machine-readable code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Retrying the same site later may succeed.
    pub transient: bool,
}
