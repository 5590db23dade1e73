//! Enabled/changed flags of the report screen's filter controls.

use serde::Serialize;

use super::options::FilterOption;
use super::types::{FilterState, MultiSelect};

/// Flags for a single control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ControlFlags {
    /// The control accepts input.
    pub enabled: bool,
    /// The control shows the "changed" marker.
    pub changed: bool,
}

/// Flags for every filter control on the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ControlState {
    /// Site picker. Always enabled.
    pub site: ControlFlags,
    /// Date range picker.
    pub date: ControlFlags,
    /// Units multi-select.
    pub units: ControlFlags,
    /// Operators multi-select.
    pub operators: ControlFlags,
    /// The clear-filters button is enabled.
    pub clear_enabled: bool,
    /// The date widget should visually reset.
    pub date_reset: bool,
}

impl ControlState {
    /// Derives control flags from the filter state.
    ///
    /// Until a lookup for the current site has been applied the option lists
    /// belong to an earlier site, so the date and option controls stay disabled.
    #[must_use]
    pub fn derive(state: &FilterState, options_loaded: bool) -> Self {
        let ready = state.is_filters_exist && options_loaded;
        let has_min_date = !state.min_date.is_empty();

        Self {
            site: ControlFlags {
                enabled: true,
                changed: state.site.changed && !state.site.value_for_dispatch.is_none(),
            },
            date: ControlFlags {
                enabled: ready && has_min_date,
                changed: state.date.changed && has_min_date && state.is_filters_exist,
            },
            units: multi_select_flags(&state.units, ready),
            operators: multi_select_flags(&state.operators.select, ready),
            clear_enabled: state.filters_changed(),
            date_reset: state.is_need_date_reset,
        }
    }
}

fn multi_select_flags<O: FilterOption>(filter: &MultiSelect<O>, ready: bool) -> ControlFlags {
    let has_options = !filter.options.is_empty();
    ControlFlags {
        enabled: ready && has_options,
        changed: filter.changed && has_options,
    }
}
