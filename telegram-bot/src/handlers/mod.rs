//! Framework-level handlers.

mod logging;

pub use logging::LoggingHandler;
