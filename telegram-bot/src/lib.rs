//! # Telegram bot framework
//!
//! Transport-agnostic core (Handler, Bot, Message), the three-phase [`HandlerChain`], teloxide adapters,
//! env-based [`BaseConfig`], the `GET /` liveness server and [`run_bot`], which ties them together.
//! Applications supply their handlers through a factory closure.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod health;
pub mod runner;
pub mod telegram;

pub use core::{
    init_tracing, parse_message_id, truncate_message, Bot, Chat, DbotError, Handler, HandlerError,
    HandlerResponse, Message, Result, ToCoreMessage, ToCoreUser, User, MAX_MESSAGE_LEN,
};

pub use chain::HandlerChain;
pub use cli::{Cli, Commands};

pub use telegram::{
    build_teloxide_bot, run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper,
};

pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{BaseConfig, DEFAULT_LOG_FILE, DEFAULT_PORT};
pub use handlers::LoggingHandler;
pub use health::{health_router, serve_health, ALIVE_BODY};
pub use runner::{build_only, run_bot, STARTUP_BANNER};
