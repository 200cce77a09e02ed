//! One model call per text reply, with a fixed fallback instead of errors.

use std::sync::Arc;

use gemini_client::LlmClient;
use tracing::{error, info, instrument};

use crate::persona::{build_prompt, FALLBACK_REPLY};

/// What the requester produced. Both variants carry text to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Generated(String),
    /// The model call failed; `reason` is the error for logs.
    Fallback { reason: String },
}

impl CompletionOutcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) => text,
            Self::Fallback { .. } => FALLBACK_REPLY,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Builds the prompt for a message and asks the configured model, never failing.
#[derive(Clone)]
pub struct CompletionRequester {
    client: Arc<dyn LlmClient>,
}

impl CompletionRequester {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Single attempt, no retry. Transport, status, safety and empty-answer failures all become
    /// [`CompletionOutcome::Fallback`].
    #[instrument(skip(self, text))]
    pub async fn request(&self, text: &str, user_name: &str) -> CompletionOutcome {
        let prompt = build_prompt(user_name, text);
        match self.client.generate(&prompt).await {
            Ok(reply) => {
                info!(reply_len = reply.len(), "Completion generated");
                CompletionOutcome::Generated(reply)
            }
            Err(e) => {
                error!(error = %e, "Completion failed, using fallback");
                CompletionOutcome::Fallback {
                    reason: e.to_string(),
                }
            }
        }
    }
}
