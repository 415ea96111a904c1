//! User settings for fintrack
//!
//! Selects the storage backend and holds display and report defaults.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::money::CURRENCY_SYMBOL;
use crate::models::Granularity;

/// Where records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// JSON files under the data directory
    #[default]
    File,
    /// Remote finance API over HTTP
    Api,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::File => write!(f, "file"),
            Backend::Api => write!(f, "api"),
        }
    }
}

/// Connection settings for the HTTP backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub backend: Backend,

    #[serde(default)]
    pub api: ApiSettings,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default horizon for `report projection`
    #[serde(default = "default_projection_months")]
    pub projection_months: u32,

    /// Default bucket size for `report period`
    #[serde(default)]
    pub default_granularity: Granularity,
}

fn default_schema_version() -> u32 {
    1
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_currency() -> String {
    CURRENCY_SYMBOL.to_string()
}

fn default_projection_months() -> u32 {
    6
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            backend: Backend::default(),
            api: ApiSettings::default(),
            currency_symbol: default_currency(),
            projection_months: default_projection_months(),
            default_granularity: Granularity::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FintrackError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until the caller decides to
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FintrackError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FintrackError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
