//! Adapters from teloxide types to core types.

use teloxide::types::UserId;

use crate::core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`]. `bot_id` is the id of the bot
/// receiving the message, used to recognise replies to its own messages.
pub struct TelegramMessageWrapper<'a> {
    message: &'a teloxide::types::Message,
    bot_id: UserId,
}

impl<'a> TelegramMessageWrapper<'a> {
    pub fn new(message: &'a teloxide::types::Message, bot_id: UserId) -> Self {
        Self { message, bot_id }
    }
}

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let msg = self.message;
        Message {
            id: msg.id.0.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(anonymous_user),
            chat: Chat {
                id: msg.chat.id.0,
                chat_type: chat_type(msg),
            },
            content: msg.text().unwrap_or("").to_string(),
            reply_to_message_id: self.reply_to_message_id(),
            reply_to_user: self.reply_to_user(),
            reply_to_this_bot: self.reply_to_this_bot(),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn replied_author(&self) -> Option<&teloxide::types::User> {
        self.message.reply_to_message().and_then(|m| m.from.as_ref())
    }

    fn reply_to_message_id(&self) -> Option<String> {
        self.message.reply_to_message().map(|msg| msg.id.0.to_string())
    }

    fn reply_to_user(&self) -> Option<User> {
        self.replied_author()
            .map(|u| TelegramUserWrapper(u).to_core())
    }

    fn reply_to_this_bot(&self) -> bool {
        is_author(self.replied_author(), self.bot_id)
    }
}

/// True when `author` is the user with `id`. Other bots do not match.
fn is_author(author: Option<&teloxide::types::User>, id: UserId) -> bool {
    author.is_some_and(|u| u.id == id)
}

/// Placeholder author for messages without `from` (e.g. channel posts).
fn anonymous_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

fn chat_type(msg: &teloxide::types::Message) -> String {
    if msg.chat.is_private() {
        "private"
    } else if msg.chat.is_group() || msg.chat.is_supergroup() {
        "group"
    } else if msg.chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
    .to_string()
}
