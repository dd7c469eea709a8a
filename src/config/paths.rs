//! Path management for matreq
//!
//! Provides XDG-compliant path resolution for configuration, the record
//! store, the audit log and saved drafts.
//!
//! ## Path Resolution Order
//!
//! 1. `MATREQ_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/matreq` or `~/.config/matreq`
//! 3. Windows: `%APPDATA%\matreq`

use std::path::PathBuf;

use crate::error::MatreqError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "MATREQ_DATA_DIR";

/// Manages all paths used by matreq
#[derive(Debug, Clone)]
pub struct MatreqPaths {
    /// Base directory for all matreq data
    base_dir: PathBuf,
}

impl MatreqPaths {
    /// Create a new MatreqPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, MatreqError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create MatreqPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/matreq/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the data directory (~/.config/matreq/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory where failed input is kept for retry
    pub fn drafts_dir(&self) -> PathBuf {
        self.base_dir.join("drafts")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.data_dir().join("audit.log")
    }

    /// Get the path to requests.json
    pub fn requests_file(&self) -> PathBuf {
        self.data_dir().join("requests.json")
    }

    /// Get the path to comments.json
    pub fn comments_file(&self) -> PathBuf {
        self.data_dir().join("comments.json")
    }

    /// Get the path to hierarchy.json (read-only product hierarchy)
    pub fn hierarchy_file(&self) -> PathBuf {
        self.data_dir().join("hierarchy.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), MatreqError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MatreqError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MatreqError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.drafts_dir())
            .map_err(|e| MatreqError::Io(format!("Failed to create drafts directory: {}", e)))?;

        Ok(())
    }

    /// Check if matreq has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MatreqError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("matreq"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| MatreqError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("matreq"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MatreqError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MatreqError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("matreq"))
}
