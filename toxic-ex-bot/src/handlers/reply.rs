//! The bot's main behaviour: pick a reply mode for each message and carry it out.

use std::sync::Arc;

use async_trait::async_trait;
use caption_renderer::CaptionRenderer;
use telegram_bot::{truncate_message, Bot, Handler, HandlerError, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument, warn};

use crate::completion::CompletionRequester;
use crate::selector::{select, RandomSource, ReplyDecision, ReplyPolicy};

/// Runs the reply policy against every message that reaches it.
///
/// Jealousy and generated replies are threaded under the triggering message; images go to the chat.
/// Returns `Reply(text)` after a text was sent, `Stop` after an image, `Continue` when silent.
pub struct ToxicReplyHandler {
    bot: Arc<dyn Bot>,
    requester: CompletionRequester,
    renderer: Arc<CaptionRenderer>,
    policy: ReplyPolicy,
    random: Arc<dyn RandomSource>,
}

impl ToxicReplyHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        requester: CompletionRequester,
        renderer: Arc<CaptionRenderer>,
        policy: ReplyPolicy,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            bot,
            requester,
            renderer,
            policy,
            random,
        }
    }

    async fn send_image(&self, message: &Message, caption: &str) -> Result<HandlerResponse> {
        let image = self
            .renderer
            .render_png(caption)
            .map_err(|e| HandlerError::Media(e.to_string()))?;
        debug!(size = image.bytes.len(), file_name = image.file_name, "Sending caption image");
        self.bot
            .send_photo(&message.chat, image.bytes, image.file_name)
            .await?;
        Ok(HandlerResponse::Stop)
    }

    async fn send_generated(&self, message: &Message) -> Result<HandlerResponse> {
        if let Err(e) = self.bot.send_typing(&message.chat).await {
            warn!(error = %e, "Failed to send typing indicator");
        }
        let outcome = self
            .requester
            .request(&message.content, &message.user.display_name())
            .await;
        let text = truncate_message(outcome.text());
        self.bot.reply_to(message, &text).await?;
        info!(fallback = outcome.is_fallback(), "Text reply sent");
        Ok(HandlerResponse::Reply(text))
    }
}

#[async_trait]
impl Handler for ToxicReplyHandler {
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let draws = self.random.draws();
        let decision = select(message, draws, &self.policy);
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            r1 = draws.r1,
            r2 = draws.r2,
            decision = decision.kind(),
            "Reply decision"
        );

        match decision {
            ReplyDecision::Jealousy { text } => {
                self.bot.reply_to(message, &text).await?;
                Ok(HandlerResponse::Reply(text))
            }
            ReplyDecision::Image { caption } => self.send_image(message, caption).await,
            ReplyDecision::Text => self.send_generated(message).await,
            ReplyDecision::NoReply => Ok(HandlerResponse::Continue),
        }
    }
}
