//! Process entry for bots built on this crate: logging, transport, handler chain, REPL and liveness server.

use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::components::{build_bot_components, build_handler_chain, BotComponents};
use crate::config::BaseConfig;
use crate::core::{init_tracing, Bot, Handler};
use crate::health::serve_health;
use crate::telegram::run_repl;

/// Banner logged once the bot is ready to poll.
pub const STARTUP_BANNER: &str = "Bot started successfully";

/// Main entry: init logging, validate config, build components, create handlers via factory, then run
/// the REPL and the liveness server side by side. Returns as soon as either of them finishes.
#[instrument(skip(config, make_handlers))]
pub async fn run_bot<F>(config: BaseConfig, make_handlers: F) -> Result<()>
where
    F: FnOnce(&BaseConfig, BotComponents) -> Vec<Arc<dyn Handler>>,
{
    config.validate()?;
    init_tracing(&config.log_file)?;

    let components = build_bot_components(&config, None);
    let teloxide_bot = components.teloxide_bot.clone();
    let handlers = make_handlers(&config, components);
    let handler_chain = build_handler_chain(handlers);

    info!(
        port = config.port,
        handlers = handler_chain.len(),
        "{}",
        STARTUP_BANNER
    );

    until_first_exit(run_repl(teloxide_bot, handler_chain), serve_health(config.port)).await
}

/// Drives polling and the liveness server together and returns the result of whichever finishes
/// first; the other is dropped. Polling ends cleanly on Ctrl-C while the server never ends on its own.
async fn until_first_exit<P, H>(polling: P, health: H) -> Result<()>
where
    P: Future<Output = Result<()>>,
    H: Future<Output = Result<()>>,
{
    tokio::select! {
        result = polling => {
            info!(ok = result.is_ok(), "Polling finished, shutting down");
            result
        }
        result = health => {
            info!(ok = result.is_ok(), "Liveness server finished, shutting down");
            result
        }
    }
}

/// Builds components and the handler chain without polling or logging setup. Integration tests inject
/// a recording bot through `bot_override` and drive the chain with fake messages.
pub fn build_only<F>(
    config: &BaseConfig,
    bot_override: Arc<dyn Bot>,
    make_handlers: F,
) -> Result<HandlerChain>
where
    F: FnOnce(&BaseConfig, BotComponents) -> Vec<Arc<dyn Handler>>,
{
    config.validate()?;
    let components = build_bot_components(config, Some(bot_override));
    Ok(build_handler_chain(make_handlers(config, components)))
}
