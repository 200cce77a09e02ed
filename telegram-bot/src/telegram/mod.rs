//! Telegram layer: teloxide adapters, [`crate::core::Bot`] implementation, bot construction, REPL runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter};
pub use runner::run_repl;
