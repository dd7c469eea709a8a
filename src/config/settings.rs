//! User settings for matreq
//!
//! Manages user preferences: who is acting by default, how dates are shown,
//! how verbose logging is, and how export files are named.

use serde::{Deserialize, Serialize};

use super::paths::MatreqPaths;
use crate::error::MatreqError;

/// Export preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Prefix of the sheet file names (`<prefix>_primary.csv`, ...)
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Export only approved requests unless asked otherwise
    #[serde(default = "default_approved_only")]
    pub approved_only: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
            approved_only: default_approved_only(),
        }
    }
}

/// User settings for matreq
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Actor name used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Log filter directive used when `MATREQ_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Export preferences
    #[serde(default)]
    pub export: ExportSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_file_prefix() -> String {
    "material_master".to_string()
}

fn default_approved_only() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_user: None,
            date_format: default_date_format(),
            log_filter: default_log_filter(),
            export: ExportSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &MatreqPaths) -> Result<Self, MatreqError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| MatreqError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MatreqError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MatreqPaths) -> Result<(), MatreqError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MatreqError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| MatreqError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
