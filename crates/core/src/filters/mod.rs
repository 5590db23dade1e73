//! Filter-dependency state machine for the report screen.
//!
//! Site, date range, units and operators are filters where each one narrows
//! the options of the filters below it.
//!
//! # Modules
//!
//! - `types` - Filter state types (FilterState, MultiSelect, DateRange)
//! - `constraint` - Dispatch constraint with full-selection normalization
//! - `options` - Option types and projection from lookup records
//! - `date` - Date bound formatting and input parsing
//! - `store` - Filter store transitions
//! - `resolver` - Operator scoping by unit selection
//! - `controls` - Enabled/changed flags for the screen controls
//! - `query` - Outbound report query

pub mod constraint;
pub mod controls;
pub mod date;
pub mod options;
pub mod query;
pub mod resolver;
pub mod store;
pub mod types;

#[cfg(test)]
mod resolver_props;
#[cfg(test)]
mod store_props;

pub use constraint::Constraint;
pub use controls::{ControlFlags, ControlState};
pub use date::{DateParseError, parse_date_input};
pub use options::{FilterOption, OperatorOption, UnitOption};
pub use query::ReportQuery;
pub use resolver::{DependencyResolver, Resolution};
pub use store::FilterStore;
pub use types::{DateRange, FilterState, MultiSelect, OperatorsFilter, Selector, SiteSelection};
