//! Error types for the bot core.
//!
//! [`DbotError`] is the top-level error; [`HandlerError`] covers failures inside handlers.

use thiserror::Error;

/// Top-level error (transport or handler).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Media error: {0}")]
    Media(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
