//! REPL runner: converts teloxide messages to core::Message and passes text messages to the HandlerChain.

use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;
use anyhow::{Context, Result};
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts long polling. Fetches the bot identity first (its id marks replies to the bot's own
/// messages); each text message runs through `handler_chain` to completion before the update is
/// acknowledged. Non-text messages are skipped. Returns when polling stops.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let me = bot
        .get_me()
        .await
        .context("get_me failed; check BOT_TOKEN and TELEGRAM_API_URL")?;
    let bot_id = me.user.id;
    info!(
        username = me.user.username.as_deref().unwrap_or(""),
        id = bot_id.0,
        "Bot identity fetched"
    );

    let chain = handler_chain;
    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            if msg.text().is_none() {
                debug!(chat_id = msg.chat.id.0, "Skipping non-text message");
                return respond(());
            }

            let core_msg = TelegramMessageWrapper::new(&msg, bot_id).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_id = %core_msg.id,
                message_content = %core_msg.content,
                "Received message"
            );

            if let Err(e) = chain.handle(&core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
            }

            respond(())
        }
    })
    .await;

    info!("Polling stopped");
    Ok(())
}
