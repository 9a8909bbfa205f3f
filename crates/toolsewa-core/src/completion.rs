//! Text-completion service trait.
//!
//! All AI interactions go through this single seam; no other module talks
//! to a completion API directly.

use crate::error::Result;

/// An external text-completion collaborator.
#[async_trait::async_trait]
pub trait CompletionService: Send + Sync {
    /// True when the service has a usable credential.
    ///
    /// Callers substitute a placeholder reply instead of calling
    /// [`complete`](Self::complete) when this is false; a missing credential
    /// is a configuration state, not an error.
    fn is_configured(&self) -> bool;

    /// Generates a completion for the prompt.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
