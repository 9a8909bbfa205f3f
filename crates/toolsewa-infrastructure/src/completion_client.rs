//! HTTP text-completion client.
//!
//! The single point of contact with the generateContent API. Retries on
//! 429 and 5xx with exponential backoff; all other failures map to typed
//! errors the assistant screen turns into inline messages.

use serde::{Deserialize, Serialize};
use toolsewa_core::ToolsewaError;
use toolsewa_core::completion::CompletionService;
use toolsewa_core::config::CompletionSettings;
use toolsewa_core::error::Result;
use tracing::{debug, warn};

const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, thiserror::Error)]
enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("completion returned empty content")]
    EmptyContent,
}

impl From<CompletionError> for ToolsewaError {
    fn from(err: CompletionError) -> Self {
        ToolsewaError::completion(err.to_string())
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Extracts the text of the first candidate part, if any.
    fn text(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.text.clone())
    }
}

/// Completion client over the generateContent REST API.
#[derive(Clone)]
pub struct HttpCompletionClient {
    client: reqwest::Client,
    settings: CompletionSettings,
}

impl HttpCompletionClient {
    pub fn new(settings: CompletionSettings) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            settings,
        }
    }

    fn api_key(&self) -> Option<&str> {
        self.settings
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.model
        )
    }

    async fn call(&self, prompt: &str, api_key: &str) -> std::result::Result<String, CompletionError> {
        let request_body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let mut last_error: Option<CompletionError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "completion attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(self.request_url())
                .header("x-goog-api-key", api_key)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(CompletionError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("completion API returned {}: {}", status, body);
                last_error = Some(CompletionError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(CompletionError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let parsed: GenerateResponse = response.json().await?;
            let text = parsed.text().ok_or(CompletionError::EmptyContent)?;

            debug!("completion succeeded ({} chars)", text.len());
            return Ok(text);
        }

        Err(last_error.unwrap_or(CompletionError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait::async_trait]
impl CompletionService for HttpCompletionClient {
    fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key()
            .ok_or_else(|| ToolsewaError::config("completion API key is not configured"))?
            .to_string();
        Ok(self.call(prompt, &api_key).await?)
    }
}
