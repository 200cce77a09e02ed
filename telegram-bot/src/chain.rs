//! # Handler chain
//!
//! Three phases per message: every `before` in order (a false stops the chain), then `handle` in order
//! until a handler answers Stop or Reply, then every `after` in reverse with the final response.

use crate::core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

fn handler_name(handler: &dyn Handler) -> &'static str {
    let full = handler.name();
    full.rsplit("::").next().unwrap_or(full)
}

#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the three phases and returns the response that ended the handle phase
    /// (`Continue` when nobody answered).
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, user_id = message.user.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        for h in &self.handlers {
            if !h.before(message).await? {
                info!(handler = handler_name(h.as_ref()), "Chain stopped in before");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let response = h.handle(message).await?;
            debug!(
                handler = handler_name(h.as_ref()),
                response = response.kind(),
                "Handler done"
            );
            if response.is_terminal() {
                final_response = response;
                break;
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        info!(response = final_response.kind(), "Message handled");
        Ok(final_response)
    }
}
