//! Filter session.
//!
//! Wraps [`crate::filters::FilterStore`] with the bookkeeping the report
//! screen needs around the asynchronous site lookup:
//!
//! - `types` - User actions, lookup tickets and outcomes
//! - `service` - The session itself

mod service;
mod types;

#[cfg(test)]
mod service_props;

pub use service::FilterSession;
pub use types::{FilterAction, LookupOutcome, LookupTicket, Notice};
