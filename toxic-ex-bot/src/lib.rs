//! # toxic_ex_bot
//!
//! A Telegram bot playing a passive-aggressive ex-partner. Replies to other people's messages get a
//! jealousy line, a small share of messages get a sad captioned image, and replies to the bot, the
//! trigger keyword or chance get a Gemini-generated answer in character.

mod assembly;
pub mod completion;
pub mod config;
pub mod handlers;
pub mod persona;
pub mod selector;

pub use assembly::{build_handlers, build_handlers_with_random, build_llm_client, run_toxic_bot};
pub use completion::{CompletionOutcome, CompletionRequester};
pub use config::AppConfig;
pub use handlers::{StartHandler, ToxicReplyHandler};
pub use selector::{select, Draws, RandomSource, ReplyDecision, ReplyPolicy, ThreadRandom};
