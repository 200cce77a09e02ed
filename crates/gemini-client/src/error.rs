//! Error type for Gemini calls.

use thiserror::Error;

/// Failure of a single `generateContent` call.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Empty response")]
    EmptyResponse,
}
