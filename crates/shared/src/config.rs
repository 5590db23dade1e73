//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Filter lookup configuration.
    #[serde(default)]
    pub lookup: LookupConfig,
    /// Filter behaviour configuration.
    #[serde(default)]
    pub filters: FiltersConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Filter lookup configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Path to the JSON site catalog served by the bundled lookup.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    /// Upper bound for a single lookup, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_catalog_path() -> String {
    "config/catalog.json".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

/// Filter behaviour configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FiltersConfig {
    /// Date range the filter returns to when a new site is picked.
    #[serde(default)]
    pub default_range: DefaultDateRange,
}

/// Default date range policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultDateRange {
    /// Blank range: no lower or upper bound.
    #[default]
    None,
    /// First day of the current month up to the end of today.
    MonthToDate,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("DEPTBOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
