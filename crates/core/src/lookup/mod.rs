//! Filter lookup contract.
//!
//! Given a site, the lookup returns every selectable unit and operator plus
//! the earliest selectable date. The core only defines the contract; the
//! shell provides the implementation.
//!
//! # Modules
//!
//! - `types` - Request/response records
//! - `error` - Lookup failures

pub mod error;
pub mod types;

use async_trait::async_trait;

pub use error::LookupError;
pub use types::{LookupRequest, LookupResponse, OperatorRecord, UnitRecord};

/// Source of the option universe for a site.
#[async_trait]
pub trait FilterLookup: Send + Sync {
    /// Fetches units, operators and the minimum date for a site.
    async fn fetch(&self, request: LookupRequest) -> Result<LookupResponse, LookupError>;
}
