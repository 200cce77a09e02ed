//! Chain handlers of the bot: `/start` first, then the reply policy.

mod reply;
mod start;

pub use reply::ToxicReplyHandler;
pub use start::{is_start_command, StartHandler};
