//! Framework configuration: Telegram connection, logging and the liveness port.

mod base;


pub use base::{BaseConfig, DEFAULT_LOG_FILE, DEFAULT_PORT};
