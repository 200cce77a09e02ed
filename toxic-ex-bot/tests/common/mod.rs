//! Shared test doubles and message builders.

#![allow(dead_code)]

pub mod mock_bot;
pub mod scripted_llm;

use telegram_bot::{Chat, Message, User};

pub const SENDER_ID: i64 = 1;
pub const CHAT_ID: i64 = -1001;

pub fn user(id: i64, first_name: &str) -> User {
    User {
        id,
        username: None,
        first_name: Some(first_name.to_string()),
        last_name: None,
    }
}

/// Plain group message from the default sender.
pub fn message(text: &str) -> Message {
    Message {
        id: "42".to_string(),
        user: user(SENDER_ID, "Оля"),
        chat: Chat {
            id: CHAT_ID,
            chat_type: "group".to_string(),
        },
        content: text.to_string(),
        reply_to_message_id: None,
        reply_to_user: None,
        reply_to_this_bot: false,
    }
}

/// Message replying to `author`'s message; `to_this_bot` marks the author as the bot under test.
pub fn reply_to(text: &str, author: User, to_this_bot: bool) -> Message {
    Message {
        reply_to_message_id: Some("41".to_string()),
        reply_to_user: Some(author),
        reply_to_this_bot: to_this_bot,
        ..message(text)
    }
}
