//! User settings for the bank ledger
//!
//! Display preferences and the name of the account data file, stored as JSON
//! next to the data directory.

use serde::{Deserialize, Serialize};

use super::paths::BankPaths;
use crate::error::{LedgerError, LedgerResult};

/// Settings schema written by this version
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Symbol printed before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Account data file name inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Timestamp format for transaction listings (strftime format)
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_data_file() -> String {
    "accounts.dat".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            data_file: default_data_file(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BankPaths) -> LedgerResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Nothing is written until the caller saves
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)?;

        if settings.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(LedgerError::Config(format!(
                "settings schema version {} is newer than supported version {}",
                settings.schema_version, CURRENT_SCHEMA_VERSION
            )));
        }

        if settings.data_file.trim().is_empty() {
            return Err(LedgerError::Config("data_file cannot be empty".into()));
        }

        Ok(settings)
    }

    /// Save settings to disk, creating the base and data directories
    pub fn save(&self, paths: &BankPaths) -> LedgerResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
