//! AI assistant service.

use std::sync::Arc;

use toolsewa_core::completion::CompletionService;
use toolsewa_core::error::Result;

use crate::session_usecase::SessionUseCase;
use crate::tools::ToolOutcome;

/// Reply used when no completion credential is configured.
pub const UNCONFIGURED_REPLY: &str = "Please configure the API key to use the AI features.";

/// Reply used when the completion collaborator fails.
pub const FAILURE_REPLY: &str = "Error generating response.";

/// Answers user prompts behind the session gate.
///
/// A missing credential yields a fixed placeholder without touching the
/// network; a completion failure yields an inline error reply. Neither
/// ever propagates into session state.
pub struct AssistantService {
    session: Arc<SessionUseCase>,
    completion: Arc<dyn CompletionService>,
}

impl AssistantService {
    pub fn new(session: Arc<SessionUseCase>, completion: Arc<dyn CompletionService>) -> Self {
        Self { session, completion }
    }

    /// Assistant screen flow: gate, complete, record.
    ///
    /// A blank prompt is ignored and returns an empty reply without
    /// consuming a free use. A failed completion returns
    /// [`FAILURE_REPLY`] and records nothing.
    pub async fn ask(&self, prompt: &str) -> Result<ToolOutcome<String>> {
        if prompt.trim().is_empty() {
            return Ok(ToolOutcome::Completed(String::new()));
        }
        if !self.session.request_gate()?.is_granted() {
            return Ok(ToolOutcome::LoginRequired);
        }

        let reply = if self.completion.is_configured() {
            match self.completion.complete(prompt).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("completion failed: {e}");
                    return Ok(ToolOutcome::Completed(FAILURE_REPLY.to_string()));
                }
            }
        } else {
            UNCONFIGURED_REPLY.to_string()
        };

        self.session
            .record_activity("ai-chat", "AI Assistant", "Query Processed")?;
        Ok(ToolOutcome::Completed(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_usecase::test_support::in_memory_session;
    use toolsewa_core::ToolsewaError;

    struct FakeCompletion {
        configured: bool,
        reply: Result<String>,
    }

    #[async_trait::async_trait]
    impl CompletionService for FakeCompletion {
        fn is_configured(&self) -> bool {
            self.configured
        }
        async fn complete(&self, _prompt: &str) -> Result<String> {
            self.reply.clone()
        }
    }

    fn service(completion: FakeCompletion) -> (Arc<SessionUseCase>, AssistantService) {
        let session = Arc::new(in_memory_session());
        session.login_with_email("a@b.com").unwrap();
        let assistant = AssistantService::new(session.clone(), Arc::new(completion));
        (session, assistant)
    }

    #[tokio::test]
    async fn test_successful_reply_records_activity() {
        let (session, assistant) = service(FakeCompletion {
            configured: true,
            reply: Ok("42".to_string()),
        });

        let outcome = assistant.ask("meaning of life?").await.unwrap();
        assert_eq!(outcome.completed().as_deref(), Some("42"));

        let log = session.activity();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].tool_id, "ai-chat");
        assert_eq!(log[0].result_summary, "Query Processed");
    }

    #[tokio::test]
    async fn test_unconfigured_key_yields_placeholder() {
        let (session, assistant) = service(FakeCompletion {
            configured: false,
            reply: Ok("unused".to_string()),
        });

        let outcome = assistant.ask("hello").await.unwrap();
        assert_eq!(outcome.completed().as_deref(), Some(UNCONFIGURED_REPLY));
        // The placeholder still counts as a processed query.
        assert_eq!(session.activity().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_yields_inline_error_without_record() {
        let (session, assistant) = service(FakeCompletion {
            configured: true,
            reply: Err(ToolsewaError::completion("unavailable")),
        });

        let outcome = assistant.ask("hello").await.unwrap();
        assert_eq!(outcome.completed().as_deref(), Some(FAILURE_REPLY));
        assert!(session.activity().is_empty());
    }

    #[tokio::test]
    async fn test_blank_prompt_does_not_consume_a_use() {
        let session = Arc::new(in_memory_session());
        let assistant = AssistantService::new(
            session.clone(),
            Arc::new(FakeCompletion {
                configured: false,
                reply: Ok(String::new()),
            }),
        );

        let outcome = assistant.ask("   ").await.unwrap();
        assert_eq!(outcome.completed().as_deref(), Some(""));
        assert_eq!(session.usage_count(), 0);
    }

    #[tokio::test]
    async fn test_gate_blocks_after_free_uses() {
        let session = Arc::new(in_memory_session());
        let assistant = AssistantService::new(
            session.clone(),
            Arc::new(FakeCompletion {
                configured: false,
                reply: Ok(String::new()),
            }),
        );

        assert!(!assistant.ask("one").await.unwrap().is_login_required());
        assert!(!assistant.ask("two").await.unwrap().is_login_required());
        assert!(assistant.ask("three").await.unwrap().is_login_required());
    }
}
