//! Application configuration model.

use serde::{Deserialize, Serialize};

/// Root configuration, stored as `config.toml` under the app config dir.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub completion: CompletionSettings,
}

/// Settings for the text-completion collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionSettings {
    /// API key. Absent means the assistant answers with a placeholder.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the generateContent endpoint family.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
