//! Filter session: the store plus lookup bookkeeping.
//!
//! The session is the single writer of the filter state. Every user action
//! and every lookup completion is one call on `&mut self`, so observers never
//! see a half-applied transition.

use tracing::{debug, info, warn};

use deptboard_shared::types::SiteId;

use crate::filters::{ControlState, FilterState, FilterStore, ReportQuery};
use crate::lookup::{LookupError, LookupRequest, LookupResponse};

use super::types::{FilterAction, LookupOutcome, LookupTicket, Notice};

/// Filter store with lookup tagging and transient notices.
#[derive(Debug, Clone, Default)]
pub struct FilterSession {
    store: FilterStore,
    generation: u64,
    pending: Option<LookupTicket>,
    loaded_generation: Option<u64>,
    notice: Option<Notice>,
}

impl FilterSession {
    /// Creates a session around a store.
    #[must_use]
    pub fn new(store: FilterStore) -> Self {
        Self {
            store,
            generation: 0,
            pending: None,
            loaded_generation: None,
            notice: None,
        }
    }

    /// Returns the current filter state.
    #[must_use]
    pub fn state(&self) -> &FilterState {
        self.store.state()
    }

    /// Returns the control flags for the current state.
    #[must_use]
    pub fn controls(&self) -> ControlState {
        ControlState::derive(self.store.state(), self.options_loaded())
    }

    /// Returns true once a lookup for the current site has been applied.
    ///
    /// Until then the option lists and `min_date` belong to an earlier site.
    #[must_use]
    pub fn options_loaded(&self) -> bool {
        self.loaded_generation == Some(self.generation)
    }

    /// Returns the outbound report query for the current state.
    #[must_use]
    pub fn query(&self) -> ReportQuery {
        ReportQuery::from(self.store.state())
    }

    /// Returns the lookup currently awaited, if any.
    #[must_use]
    pub fn pending(&self) -> Option<LookupTicket> {
        self.pending
    }

    /// Returns the last notice without clearing it.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns and clears the last notice.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Applies a user action.
    ///
    /// Returns a ticket when the action requires a lookup: only when the
    /// dispatched site actually changes to a nonzero id. The caller runs the
    /// lookup and hands the result to [`FilterSession::apply_lookup`].
    ///
    /// Date and option edits are ignored until the current site's lookup has
    /// been applied.
    pub fn apply(&mut self, action: FilterAction) -> Option<LookupTicket> {
        debug!(action = action.name(), generation = self.generation, "applying filter action");

        if action.edits_site_filters() && !self.options_loaded() {
            warn!(
                action = action.name(),
                site_id = %self.store.state().site.value_for_dispatch,
                "ignoring edit before the site's filters are loaded"
            );
            return None;
        }

        match action {
            FilterAction::SelectSite(site_id) => self.select_site(site_id),
            FilterAction::SelectDateRange { from, to } => {
                self.store.set_date(from, to);
                None
            }
            FilterAction::SelectOptions { which, ids } => {
                self.store.set_options(which, &ids);
                None
            }
            FilterAction::Clear => {
                let previous_site = self.store.state().site.value_for_dispatch;
                self.store.clear_filters();
                self.notice = None;
                self.site_changed(previous_site);
                None
            }
        }
    }

    /// Builds the lookup request for a ticket.
    #[must_use]
    pub fn request_for(ticket: LookupTicket) -> LookupRequest {
        LookupRequest {
            site_id: ticket.site_id,
        }
    }

    /// Feeds a lookup result back into the session.
    ///
    /// Results for a superseded ticket are dropped. A failed lookup leaves the
    /// state untouched and raises a notice.
    pub fn apply_lookup(
        &mut self,
        ticket: LookupTicket,
        result: Result<LookupResponse, LookupError>,
    ) -> LookupOutcome {
        if !self.is_current(ticket) {
            warn!(
                site_id = %ticket.site_id,
                ticket_generation = ticket.generation,
                generation = self.generation,
                "dropping stale lookup response"
            );
            return LookupOutcome::Stale;
        }

        self.pending = None;
        match result {
            Ok(response) => {
                info!(
                    site_id = %ticket.site_id,
                    units = response.units.len(),
                    operators = response.operators.len(),
                    "lookup applied"
                );
                self.store.apply_lookup_response(&response);
                self.loaded_generation = Some(self.generation);
                self.notice = None;
                LookupOutcome::Applied
            }
            Err(err) => {
                warn!(site_id = %ticket.site_id, error = %err, "lookup failed");
                let notice = Notice {
                    code: err.error_code(),
                    message: err.to_string(),
                    transient: err.is_transient(),
                };
                self.notice = Some(notice.clone());
                LookupOutcome::Failed(notice)
            }
        }
    }

    fn select_site(&mut self, site_id: SiteId) -> Option<LookupTicket> {
        let previous_site = self.store.state().site.value_for_dispatch;
        self.store.set_site(site_id);
        self.site_changed(previous_site)
    }

    /// Bumps the generation if the dispatched site moved, issuing a ticket for a nonzero site.
    fn site_changed(&mut self, previous_site: SiteId) -> Option<LookupTicket> {
        let site_id = self.store.state().site.value_for_dispatch;
        if site_id == previous_site {
            return None;
        }

        self.generation += 1;
        self.pending = None;
        if site_id.is_none() {
            return None;
        }

        let ticket = LookupTicket {
            site_id,
            generation: self.generation,
        };
        self.pending = Some(ticket);
        debug!(site_id = %site_id, generation = self.generation, "lookup issued");
        Some(ticket)
    }

    fn is_current(&self, ticket: LookupTicket) -> bool {
        ticket.generation == self.generation
            && ticket.site_id == self.store.state().site.value_for_dispatch
    }
}
