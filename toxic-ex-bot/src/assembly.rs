//! Assembly: builds the Gemini client and the handler list, then hands them to the framework runner.

use std::sync::Arc;

use anyhow::Result;
use caption_renderer::CaptionRenderer;
use gemini_client::{mask_token, GeminiClient, LlmClient};
use telegram_bot::{run_bot, BotComponents, Handler};
use tracing::info;

use crate::completion::CompletionRequester;
use crate::config::AppConfig;
use crate::handlers::{StartHandler, ToxicReplyHandler};
use crate::persona::{safety_settings, PERSONA_INSTRUCTION};
use crate::selector::{RandomSource, ThreadRandom};

/// Gemini client carrying the persona and safety policy.
pub fn build_llm_client(config: &AppConfig) -> Arc<dyn LlmClient> {
    info!(
        model = %config.gemini_model,
        api_url = %config.gemini_api_url,
        api_key = %mask_token(&config.google_api_key),
        "Configuring Gemini client"
    );
    Arc::new(
        GeminiClient::new(config.google_api_key.clone())
            .with_base_url(config.gemini_api_url.clone())
            .with_model(config.gemini_model.clone())
            .with_system_instruction(PERSONA_INSTRUCTION)
            .with_safety_settings(safety_settings())
            .with_timeout(config.gemini_timeout),
    )
}

/// Handlers in chain order: `/start`, then the reply policy with the given random source.
pub fn build_handlers_with_random(
    config: &AppConfig,
    components: BotComponents,
    random: Arc<dyn RandomSource>,
) -> Vec<Arc<dyn Handler>> {
    let requester = CompletionRequester::new(build_llm_client(config));
    let renderer = Arc::new(CaptionRenderer::new(Some(config.caption_font_path.as_path())));

    vec![
        Arc::new(StartHandler::new(components.bot.clone())),
        Arc::new(ToxicReplyHandler::new(
            components.bot,
            requester,
            renderer,
            config.policy.clone(),
            random,
        )),
    ]
}

pub fn build_handlers(config: &AppConfig, components: BotComponents) -> Vec<Arc<dyn Handler>> {
    build_handlers_with_random(config, components, Arc::new(ThreadRandom))
}

/// Validates config and runs the bot until polling or the liveness server fails.
pub async fn run_toxic_bot(config: AppConfig) -> Result<()> {
    config.validate()?;
    let base = config.base.clone();
    run_bot(base, move |_base, components| build_handlers(&config, components)).await
}
