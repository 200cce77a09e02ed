//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use crate::core::{parse_message_id, Bot as CoreBot, Chat, DbotError, Message, Result};
use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId, InputFile, MessageId, ReplyParameters};
use tracing::{error, info};

/// Creates a teloxide Bot for `token`, pointed at `api_url` when one is given and parses.
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> teloxide::Bot {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => {
                info!(url = %url_str, "Using custom Telegram API URL");
                bot.set_api_url(url)
            }
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn bot_error(e: teloxide::RequestError) -> DbotError {
    DbotError::Bot(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let id = parse_message_id(&message.id)?;
        self.bot
            .send_message(ChatId(message.chat.id), text.to_string())
            .reply_parameters(ReplyParameters::new(MessageId(id)))
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, image: Vec<u8>, file_name: &str) -> Result<()> {
        let photo = InputFile::memory(image).file_name(file_name.to_string());
        self.bot
            .send_photo(ChatId(chat.id), photo)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(bot_error)?;
        Ok(())
    }
}
