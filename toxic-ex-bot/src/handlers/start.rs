//! `/start` greeting.

use std::sync::Arc;

use async_trait::async_trait;
use telegram_bot::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

use crate::persona::START_REPLY;

/// True for `/start`, `/start payload` and `/start@SomeBot`.
pub fn is_start_command(text: &str) -> bool {
    let first = text.trim_start().split_whitespace().next().unwrap_or("");
    let command = first.split('@').next().unwrap_or("");
    command == "/start"
}

/// Greets on `/start` and stops the chain; passes everything else on.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !is_start_command(&message.content) {
            return Ok(HandlerResponse::Continue);
        }
        info!(user_id = message.user.id, chat_id = message.chat.id, "Start command");
        self.bot.send_message(&message.chat, START_REPLY).await?;
        Ok(HandlerResponse::Reply(START_REPLY.to_string()))
    }
}
