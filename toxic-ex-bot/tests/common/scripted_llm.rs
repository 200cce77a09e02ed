//! [`LlmClient`] double that returns a fixed answer and records prompts.

use std::sync::Mutex;

use async_trait::async_trait;
use gemini_client::{GeminiError, LlmClient};

pub struct ScriptedLlm {
    answer: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    pub fn answering(text: &str) -> Self {
        Self {
            answer: Some(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with a safety block.
    pub fn blocked() -> Self {
        Self {
            answer: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
            .clone()
            .ok_or_else(|| GeminiError::Blocked("SAFETY".to_string()))
    }
}
