//! Unified path management for ToolSewa state and configuration files.
//!
//! All persisted state lives under one per-platform config directory:
//!
//! ```text
//! ~/.config/toolsewa/          # Linux (platform-appropriate elsewhere)
//! ├── config.toml              # Application configuration
//! ├── profile.json             # Logged-in user profile
//! ├── usage.json               # Anonymous usage counter
//! └── history.json             # Activity log
//! ```
//!
//! Tests pass an explicit base directory instead of touching the real one.

use std::path::{Path, PathBuf};

use toolsewa_core::error::{Result, ToolsewaError};

/// Resolves the storage locations for one installation.
#[derive(Debug, Clone)]
pub struct ToolsewaPaths {
    base: Option<PathBuf>,
}

impl ToolsewaPaths {
    /// Creates a path resolver.
    ///
    /// `base` overrides the platform config directory; pass `None` for the
    /// default location and `Some(dir)` in tests.
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// The directory holding all ToolSewa files.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("toolsewa"))
            .ok_or_else(|| ToolsewaError::config("cannot determine config directory"))
    }

    /// Path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Path to the persisted user profile.
    pub fn profile_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("profile.json"))
    }

    /// Path to the persisted usage counter.
    pub fn usage_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("usage.json"))
    }

    /// Path to the persisted activity log.
    pub fn history_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("history.json"))
    }
}
