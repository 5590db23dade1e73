//! Catalog-backed filter lookup.
//!
//! The catalog is a JSON document listing the option universe of every site:
//!
//! ```json
//! { "sites": [ { "site_id": 1, "units": [...], "operators": [...], "min_date": "2023-01-01" } ] }
//! ```

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use deptboard_core::lookup::{FilterLookup, LookupError, LookupRequest, LookupResponse};
use deptboard_shared::types::SiteId;
use deptboard_shared::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    sites: Vec<CatalogSite>,
}

#[derive(Debug, Deserialize)]
struct CatalogSite {
    #[serde(alias = "siteId")]
    site_id: SiteId,
    #[serde(flatten)]
    response: LookupResponse,
}

/// In-memory lookup over a site catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogLookup {
    sites: HashMap<SiteId, LookupResponse>,
}

impl CatalogLookup {
    /// Creates a lookup from site entries. Later entries replace earlier ones.
    pub fn with_sites(sites: impl IntoIterator<Item = (SiteId, LookupResponse)>) -> Self {
        Self {
            sites: sites.into_iter().collect(),
        }
    }

    /// Parses a catalog document.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| AppError::Configuration(format!("invalid site catalog: {e}")))?;
        Ok(Self::with_sites(
            file.sites.into_iter().map(|s| (s.site_id, s.response)),
        ))
    }

    /// Reads and parses a catalog file.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Configuration(format!("cannot read site catalog {}: {e}", path.display()))
        })?;

        let lookup = Self::from_json(&json)?;
        info!(path = %path.display(), sites = lookup.len(), "site catalog loaded");
        Ok(lookup)
    }

    /// Returns the number of sites in the catalog.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Returns true if the catalog has no sites.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

#[async_trait]
impl FilterLookup for CatalogLookup {
    async fn fetch(&self, request: LookupRequest) -> Result<LookupResponse, LookupError> {
        debug!(site_id = %request.site_id, "catalog lookup");
        self.sites
            .get(&request.site_id)
            .cloned()
            .ok_or(LookupError::SiteNotFound(request.site_id))
    }
}
