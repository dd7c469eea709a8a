//! Configuration module for matreq
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MatreqPaths;
pub use settings::Settings;
