//! Outbound side of the transport.
//!
//! [`Bot`] is transport-agnostic; `TelegramBotAdapter` implements it via teloxide and tests substitute
//! recording doubles.

use async_trait::async_trait;

use super::error::{DbotError, Result};
use super::types::{Chat, Message};

/// Operations the handlers need from the messaging platform.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends `text` as a threaded reply to `message`.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Uploads an in-memory image as a photo.
    async fn send_photo(&self, chat: &Chat, image: Vec<u8>, file_name: &str) -> Result<()>;
    /// Shows the "typing…" indicator in the chat.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
}

/// Parses a core message id back into Telegram's numeric id.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id: {}", s)))
}

/// Telegram's limit on a text message, in UTF-16 code units.
pub const MAX_MESSAGE_LEN: usize = 4096;

/// Cuts `text` to fit in one Telegram message, ending with `…` when anything was dropped.
pub fn truncate_message(text: &str) -> String {
    if text.encode_utf16().count() <= MAX_MESSAGE_LEN {
        return text.to_string();
    }
    let budget = MAX_MESSAGE_LEN - '…'.len_utf16();
    let mut used = 0;
    let mut out: String = text
        .chars()
        .take_while(|c| {
            used += c.len_utf16();
            used <= budget
        })
        .collect();
    out.push('…');
    out
}
