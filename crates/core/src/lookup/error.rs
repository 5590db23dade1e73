//! Lookup error types.

use thiserror::Error;

use deptboard_shared::types::SiteId;

/// Errors a filter lookup can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The lookup does not know the site.
    #[error("site {0} not found")]
    SiteNotFound(SiteId),

    /// The lookup could not be reached or answered with a server error.
    #[error("lookup unavailable: {0}")]
    Unavailable(String),

    /// The lookup did not answer in time.
    #[error("lookup timed out after {after_ms} ms")]
    TimedOut {
        /// Elapsed budget in milliseconds.
        after_ms: u64,
    },

    /// The payload could not be read at all.
    #[error("malformed lookup payload: {0}")]
    Malformed(String),
}

impl LookupError {
    /// Returns the error code for notices and API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::SiteNotFound(_) => "SITE_NOT_FOUND",
            Self::Unavailable(_) => "LOOKUP_UNAVAILABLE",
            Self::TimedOut { .. } => "LOOKUP_TIMED_OUT",
            Self::Malformed(_) => "LOOKUP_MALFORMED",
        }
    }

    /// Returns true if retrying the same site later may succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::TimedOut { .. })
    }
}
