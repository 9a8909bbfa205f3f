//! Configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use toolsewa_core::config::AppConfig;
use toolsewa_core::error::Result;

use crate::paths::ToolsewaPaths;

/// Environment variable that overrides the configured completion API key.
pub const API_KEY_ENV: &str = "TOOLSEWA_API_KEY";

/// Loads and saves the application configuration (`config.toml`).
///
/// Loading is lenient: a missing or unreadable file yields defaults so a
/// bad config never prevents startup. Saving is explicit and strict.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service for the default location, or under `base_dir`
    /// when given (for testing).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let path = ToolsewaPaths::new(base_dir).config_file()?;
        Ok(Self { path })
    }

    /// Loads the configuration, falling back to defaults.
    ///
    /// A `TOOLSEWA_API_KEY` environment variable overrides the file's
    /// completion key.
    pub fn load(&self) -> AppConfig {
        let mut config = self.load_file();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.completion.api_key = Some(key);
            }
        }
        config
    }

    fn load_file(&self) -> AppConfig {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return AppConfig::default(),
            Err(e) => {
                tracing::warn!("cannot read {}: {e}, using defaults", self.path.display());
                return AppConfig::default();
            }
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("cannot parse {}: {e}, using defaults", self.path.display());
                AppConfig::default()
            }
        }
    }

    /// Persists the configuration.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let toml_string = toml::to_string_pretty(config)?;
        fs::write(&self.path, toml_string)?;
        Ok(())
    }
}
