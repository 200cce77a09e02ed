//! Handler chain result type.

/// Result of a handler's `handle` phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing textual to report (e.g. a photo was sent).
    Stop,
    /// Stop the chain; carries the text that was sent so `after()` hooks can see it.
    Reply(String),
}

impl HandlerResponse {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Stop => "stop",
            Self::Reply(_) => "reply",
        }
    }

    /// Whether this response ends the handle phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stop | Self::Reply(_))
    }
}
