//! Inbound message type for the core model.

use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A single inbound text message with its author, chat and optional reply context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub reply_to_message_id: Option<String>,
    /// Author of the replied-to message, when there is one and Telegram exposes it.
    pub reply_to_user: Option<User>,
    /// Whether the replied-to message was sent by the bot receiving this message (not any bot).
    pub reply_to_this_bot: bool,
}

impl Message {
    /// True when this message answers one of the bot's own messages.
    pub fn is_reply_to_bot(&self) -> bool {
        self.reply_to_message_id.is_some() && self.reply_to_this_bot
    }

    /// Author of the replied-to message if it is neither the sender nor this bot. Other bots count.
    pub fn third_party(&self) -> Option<&User> {
        if self.reply_to_this_bot {
            return None;
        }
        self.reply_to_user
            .as_ref()
            .filter(|author| author.id != self.user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            username: None,
            first_name: Some(name.to_string()),
            last_name: None,
        }
    }

    fn message(reply_to: Option<User>, to_this_bot: bool) -> Message {
        Message {
            id: "1".to_string(),
            user: user(1, "A"),
            chat: Chat {
                id: 10,
                chat_type: "group".to_string(),
            },
            content: "hi".to_string(),
            reply_to_message_id: reply_to.as_ref().map(|_| "0".to_string()),
            reply_to_user: reply_to,
            reply_to_this_bot: to_this_bot,
        }
    }

    #[test]
    fn test_third_party_other_user() {
        let msg = message(Some(user(2, "B")), false);
        assert_eq!(msg.third_party().map(|u| u.id), Some(2));
        assert!(!msg.is_reply_to_bot());
    }

    #[test]
    fn test_third_party_excludes_self_and_bot() {
        assert!(message(Some(user(1, "A")), false).third_party().is_none());
        let to_bot = message(Some(user(99, "Bot")), true);
        assert!(to_bot.third_party().is_none());
        assert!(to_bot.is_reply_to_bot());
    }

    #[test]
    fn test_other_bot_is_third_party() {
        let msg = message(Some(user(777, "WeatherBot")), false);
        assert_eq!(msg.third_party().map(|u| u.id), Some(777));
        assert!(!msg.is_reply_to_bot());
    }

    #[test]
    fn test_no_reply() {
        let msg = message(None, false);
        assert!(msg.third_party().is_none());
        assert!(!msg.is_reply_to_bot());
    }
}
