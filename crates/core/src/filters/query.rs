//! Outbound report query built from the filter state.

use serde::{Deserialize, Serialize};

use deptboard_shared::types::{OperatorId, SiteId, UnitId};

use super::types::FilterState;

/// Filter values consumed by the report query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Selected site; 0 when none.
    pub site_id: SiteId,
    /// Lower date bound.
    pub date_from: Option<String>,
    /// Upper date bound.
    pub date_to: Option<String>,
    /// Unit constraint; `None` means every unit.
    pub unit_ids: Option<Vec<UnitId>>,
    /// Operator constraint; `None` means every operator.
    pub operator_ids: Option<Vec<OperatorId>>,
    /// Whether the query should run at all.
    pub enabled: bool,
}

impl From<&FilterState> for ReportQuery {
    fn from(state: &FilterState) -> Self {
        Self {
            site_id: state.site.value_for_dispatch,
            date_from: state.date.from_bound().map(str::to_string),
            date_to: state.date.to_bound().map(str::to_string),
            unit_ids: state.unit_dispatch().to_option(),
            operator_ids: state.operator_dispatch().to_option(),
            enabled: state.filters_changed(),
        }
    }
}
