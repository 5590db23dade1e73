//! Selectable options and their projection from lookup records.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use deptboard_shared::types::{OperatorId, UnitId};

use crate::lookup::{OperatorRecord, UnitRecord};

/// Common shape of a selectable option: an id and a display label.
pub trait FilterOption: Clone {
    /// ID type dispatched downstream.
    type Id: Copy + Eq + Hash + Ord + Debug + Serialize + DeserializeOwned;

    /// Returns the option id.
    fn id(&self) -> Self::Id;

    /// Returns the display label.
    fn label(&self) -> &str;
}

/// Selectable unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOption {
    /// Unit ID.
    pub value: UnitId,
    /// Display label.
    pub label: String,
}

impl FilterOption for UnitOption {
    type Id = UnitId;

    fn id(&self) -> UnitId {
        self.value
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Selectable operator, tagged with the units it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorOption {
    /// Operator ID.
    pub value: OperatorId,
    /// Display label.
    pub label: String,
    /// Owning units.
    pub unit_ids: Vec<UnitId>,
}

impl OperatorOption {
    /// Returns true if at least one owning unit is in `units`.
    #[must_use]
    pub fn belongs_to_any(&self, units: &[UnitId]) -> bool {
        self.unit_ids.iter().any(|id| units.contains(id))
    }
}

impl FilterOption for OperatorOption {
    type Id = OperatorId;

    fn id(&self) -> OperatorId {
        self.value
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Projects unit records into options.
#[must_use]
pub fn unit_options(records: &[UnitRecord]) -> Vec<UnitOption> {
    records
        .iter()
        .map(|r| UnitOption {
            value: r.id,
            label: r.name.clone(),
        })
        .collect()
}

/// Projects operator records into options, keeping their owning units.
#[must_use]
pub fn operator_options(records: &[OperatorRecord]) -> Vec<OperatorOption> {
    records
        .iter()
        .map(|r| OperatorOption {
            value: r.id,
            label: r.name.clone(),
            unit_ids: r.owning_units(),
        })
        .collect()
}

/// Returns the ids of `options`, in order.
#[must_use]
pub fn option_ids<O: FilterOption>(options: &[O]) -> Vec<O::Id> {
    options.iter().map(FilterOption::id).collect()
}

/// Picks the options whose id is in `ids`, keeping option order and dropping unknown ids.
#[must_use]
pub fn pick<O: FilterOption>(options: &[O], ids: &[O::Id]) -> Vec<O> {
    let wanted: HashSet<O::Id> = ids.iter().copied().collect();
    options
        .iter()
        .filter(|o| wanted.contains(&o.id()))
        .cloned()
        .collect()
}

/// Unordered comparison of two option lists by id.
#[must_use]
pub fn same_ids<O: FilterOption>(a: &[O], b: &[O]) -> bool {
    let left: HashSet<O::Id> = a.iter().map(FilterOption::id).collect();
    let right: HashSet<O::Id> = b.iter().map(FilterOption::id).collect();
    left == right
}
