//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use std::sync::Arc;

use crate::chain::HandlerChain;
use crate::config::BaseConfig;
use crate::core::{Bot, Handler};
use crate::handlers::LoggingHandler;
use crate::telegram::{build_teloxide_bot, TelegramBotAdapter};

/// Transport handles passed to the application's handler factory.
#[derive(Clone)]
pub struct BotComponents {
    /// Drives the REPL.
    pub teloxide_bot: teloxide::Bot,
    /// What handlers send through; a [`TelegramBotAdapter`] unless overridden.
    pub bot: Arc<dyn Bot>,
}

/// Builds components from config. `bot_override` replaces the outbound Bot (tests inject a recorder).
pub fn build_bot_components(
    config: &BaseConfig,
    bot_override: Option<Arc<dyn Bot>>,
) -> BotComponents {
    let teloxide_bot = build_teloxide_bot(&config.bot_token, config.telegram_api_url.as_deref());
    let bot = bot_override
        .unwrap_or_else(|| Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())) as Arc<dyn Bot>);
    BotComponents { teloxide_bot, bot }
}

/// Builds the handler chain: logging first, then the application handlers in order.
pub fn build_handler_chain(handlers: Vec<Arc<dyn Handler>>) -> HandlerChain {
    handlers
        .into_iter()
        .fold(
            HandlerChain::new().add_handler(Arc::new(LoggingHandler::new())),
            |chain, handler| chain.add_handler(handler),
        )
}
