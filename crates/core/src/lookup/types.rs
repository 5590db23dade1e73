//! Request and response shapes of the filter lookup.
//!
//! Payloads are read leniently: a missing `units`, `operators` or `min_date`
//! field deserializes as empty rather than failing the whole response.

use serde::{Deserialize, Serialize};

use deptboard_shared::types::{OperatorId, SiteId, UnitId};

/// Lookup request for a single site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    /// Site the option universe is requested for.
    #[serde(alias = "siteId")]
    pub site_id: SiteId,
}

/// Unit record as returned by the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    /// Unit ID.
    pub id: UnitId,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// Operator record as returned by the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorRecord {
    /// Operator ID.
    pub id: OperatorId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Units the operator belongs to.
    #[serde(default, alias = "unitIds")]
    pub unit_ids: Vec<UnitId>,
    /// Single owning unit, as older payloads report it.
    #[serde(default, alias = "unitId", skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<UnitId>,
}

impl OperatorRecord {
    /// Returns every owning unit, merging `unit_id` into `unit_ids` without duplicates.
    #[must_use]
    pub fn owning_units(&self) -> Vec<UnitId> {
        let mut units = self.unit_ids.clone();
        if let Some(unit_id) = self.unit_id
            && !units.contains(&unit_id)
        {
            units.push(unit_id);
        }
        units
    }
}

/// Full option universe for one site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    /// Every selectable unit.
    #[serde(default)]
    pub units: Vec<UnitRecord>,
    /// Every selectable operator.
    #[serde(default)]
    pub operators: Vec<OperatorRecord>,
    /// Earliest selectable date, as reported by the lookup.
    #[serde(default, alias = "minDate")]
    pub min_date: String,
}
