//! Filter routes.
//!
//! Each route applies one action to the shared filter session and answers
//! with the resulting view. A site change runs the lookup outside the session
//! lock, so a newer site choice supersedes a lookup still in flight.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use deptboard_core::filters::{
    ControlState, FilterState, ReportQuery, Selector, parse_date_input,
};
use deptboard_core::lookup::{LookupError, LookupResponse};
use deptboard_core::session::{FilterAction, FilterSession, LookupOutcome, LookupTicket, Notice};
use deptboard_shared::AppError;
use deptboard_shared::types::SiteId;

use crate::{AppState, error::ApiError};

/// Creates the filter routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/filters", get(get_filters).delete(clear_filters))
        .route("/filters/query", get(get_query))
        .route("/filters/site", put(select_site))
        .route("/filters/date", put(select_date))
        .route("/filters/{selector}", put(select_options))
}

// ============================================================================
// Request Types
// ============================================================================

/// Body of `PUT /filters/site`.
#[derive(Debug, Deserialize)]
pub struct SelectSiteRequest {
    /// Site to select; 0 deselects.
    #[serde(alias = "siteId")]
    pub site_id: SiteId,
}

/// Body of `PUT /filters/date`.
#[derive(Debug, Deserialize)]
pub struct SelectDateRequest {
    /// Lower bound, `YYYY-MM-DD` or RFC 3339.
    pub from: String,
    /// Optional upper bound in the same formats.
    #[serde(default)]
    pub to: Option<String>,
}

/// Body of `PUT /filters/units` and `PUT /filters/operators`.
#[derive(Debug, Deserialize)]
pub struct SelectOptionsRequest {
    /// Selected option ids.
    #[serde(default)]
    pub ids: Vec<u64>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Snapshot of the filter session.
#[derive(Debug, Serialize)]
pub struct FiltersView {
    /// Full filter state.
    pub state: FilterState,
    /// Control flags derived from the state.
    pub controls: ControlState,
    /// Outbound report query.
    pub query: ReportQuery,
    /// Lookup still awaited, if any.
    pub pending: Option<LookupTicket>,
    /// Last lookup notice, if any.
    pub notice: Option<Notice>,
    /// Outcome of the lookup run by this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup: Option<&'static str>,
}

impl FiltersView {
    fn of(session: &FilterSession) -> Self {
        Self {
            state: session.state().clone(),
            controls: session.controls(),
            query: session.query(),
            pending: session.pending(),
            notice: session.notice().cloned(),
            lookup: None,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn get_filters(State(state): State<AppState>) -> Json<FiltersView> {
    let session = state.session.lock().await;
    Json(FiltersView::of(&session))
}

async fn get_query(State(state): State<AppState>) -> Json<ReportQuery> {
    Json(state.session.lock().await.query())
}

async fn clear_filters(State(state): State<AppState>) -> Json<FiltersView> {
    apply(&state, FilterAction::Clear).await
}

async fn select_date(
    State(state): State<AppState>,
    Json(request): Json<SelectDateRequest>,
) -> Result<Json<FiltersView>, ApiError> {
    let from = parse_date_input(&request.from)?;
    let to = match request.to.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(to) => Some(parse_date_input(to)?),
    };

    apply_edit(&state, FilterAction::SelectDateRange { from, to }).await
}

async fn select_options(
    State(state): State<AppState>,
    Path(selector): Path<String>,
    Json(request): Json<SelectOptionsRequest>,
) -> Result<Json<FiltersView>, ApiError> {
    let which = Selector::parse(&selector)
        .ok_or_else(|| AppError::NotFound(format!("Unknown filter '{selector}'")))?;

    apply_edit(
        &state,
        FilterAction::SelectOptions {
            which,
            ids: request.ids,
        },
    )
    .await
}

async fn select_site(
    State(state): State<AppState>,
    Json(request): Json<SelectSiteRequest>,
) -> Result<Json<FiltersView>, ApiError> {
    let ticket = state
        .session
        .lock()
        .await
        .apply(FilterAction::SelectSite(request.site_id));

    let Some(ticket) = ticket else {
        debug!(site_id = %request.site_id, "no lookup needed");
        let session = state.session.lock().await;
        return Ok(Json(FiltersView::of(&session)));
    };

    let result = run_lookup(&state, ticket).await;
    let failure = result.as_ref().err().cloned();

    let mut session = state.session.lock().await;
    let outcome = session.apply_lookup(ticket, result);
    if let (LookupOutcome::Failed(_), Some(err)) = (&outcome, failure) {
        return Err(err.into());
    }

    info!(site_id = %ticket.site_id, outcome = outcome.name(), "site selection finished");
    let mut view = FiltersView::of(&session);
    view.lookup = Some(outcome.name());
    Ok(Json(view))
}

// ============================================================================
// Helpers
// ============================================================================

async fn apply(state: &AppState, action: FilterAction) -> Json<FiltersView> {
    let mut session = state.session.lock().await;
    session.apply(action);
    Json(FiltersView::of(&session))
}

/// Applies a date or option edit, refused while the site's filters are not loaded.
async fn apply_edit(state: &AppState, action: FilterAction) -> Result<Json<FiltersView>, ApiError> {
    let mut session = state.session.lock().await;
    if !session.options_loaded() {
        return Err(AppError::Conflict(format!(
            "Filters for site {} are not loaded",
            session.state().site.value_for_dispatch
        ))
        .into());
    }

    session.apply(action);
    Ok(Json(FiltersView::of(&session)))
}

/// Runs the lookup for a ticket, bounded by the configured timeout.
async fn run_lookup(state: &AppState, ticket: LookupTicket) -> Result<LookupResponse, LookupError> {
    let request = FilterSession::request_for(ticket);
    match tokio::time::timeout(state.lookup_timeout, state.lookup.fetch(request)).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::TimedOut {
            after_ms: u64::try_from(state.lookup_timeout.as_millis()).unwrap_or(u64::MAX),
        }),
    }
}
