//! Recording [`Bot`] that never touches the network.

use std::sync::Mutex;

use async_trait::async_trait;
use telegram_bot::{Bot, Chat, DbotError, Message, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Reply { chat_id: i64, message_id: String, text: String },
    Photo { chat_id: i64, file_name: String, bytes: Vec<u8> },
    Typing { chat_id: i64 },
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail_replies: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bot whose `reply_to` always fails, like a deleted chat.
    pub fn failing_replies() -> Self {
        Self {
            fail_replies: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn push(&self, item: Sent) {
        self.sent.lock().unwrap().push(item);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.push(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        if self.fail_replies {
            return Err(DbotError::Bot("Forbidden: bot was kicked".to_string()));
        }
        self.push(Sent::Reply {
            chat_id: message.chat.id,
            message_id: message.id.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, image: Vec<u8>, file_name: &str) -> Result<()> {
        self.push(Sent::Photo {
            chat_id: chat.id,
            file_name: file_name.to_string(),
            bytes: image,
        });
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.push(Sent::Typing { chat_id: chat.id });
        Ok(())
    }
}
