//! Application config: framework [`BaseConfig`] plus Gemini, reply policy and caption font. Loaded from env.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use gemini_client::{DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use telegram_bot::BaseConfig;

use crate::selector::{
    ReplyPolicy, DEFAULT_IMAGE_PROBABILITY, DEFAULT_TEXT_PROBABILITY, DEFAULT_TRIGGER_KEYWORD,
};

pub const DEFAULT_CAPTION_FONT: &str = "arial.ttf";

/// Immutable after startup; shared with handlers by value or `Arc`.
#[derive(Clone)]
pub struct AppConfig {
    pub base: BaseConfig,
    /// GOOGLE_API_KEY
    pub google_api_key: String,
    /// GEMINI_MODEL
    pub gemini_model: String,
    /// GEMINI_API_URL
    pub gemini_api_url: String,
    /// GEMINI_TIMEOUT_SECS
    pub gemini_timeout: Duration,
    /// IMAGE_REPLY_PROBABILITY, TEXT_REPLY_PROBABILITY, TRIGGER_KEYWORD
    pub policy: ReplyPolicy,
    /// CAPTION_FONT_PATH
    pub caption_font_path: PathBuf,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(s) if !s.trim().is_empty() => s
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", key, s)),
        _ => Ok(default),
    }
}

impl AppConfig {
    /// Loads from environment variables; `token` and `port` override BOT_TOKEN and PORT.
    /// Fails when BOT_TOKEN or GOOGLE_API_KEY is missing or a numeric variable does not parse.
    pub fn load(token: Option<String>, port: Option<u16>) -> Result<Self> {
        let base = BaseConfig::load(token, port)?;
        let google_api_key = env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("GOOGLE_API_KEY not set"))?;

        let policy = ReplyPolicy {
            image_probability: env_parse("IMAGE_REPLY_PROBABILITY", DEFAULT_IMAGE_PROBABILITY)?,
            text_probability: env_parse("TEXT_REPLY_PROBABILITY", DEFAULT_TEXT_PROBABILITY)?,
            trigger_keyword: env_or("TRIGGER_KEYWORD", DEFAULT_TRIGGER_KEYWORD)
                .trim()
                .to_lowercase(),
        };

        Ok(Self {
            base,
            google_api_key,
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_MODEL),
            gemini_api_url: env_or("GEMINI_API_URL", DEFAULT_API_BASE),
            gemini_timeout: Duration::from_secs(env_parse(
                "GEMINI_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
            policy,
            caption_font_path: PathBuf::from(env_or("CAPTION_FONT_PATH", DEFAULT_CAPTION_FONT)),
        })
    }

    /// Checks base config, URL, probabilities in [0, 1], non-empty keyword and a non-zero timeout.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if reqwest::Url::parse(&self.gemini_api_url).is_err() {
            anyhow::bail!("GEMINI_API_URL is not a valid URL: {}", self.gemini_api_url);
        }
        for (name, p) in [
            ("IMAGE_REPLY_PROBABILITY", self.policy.image_probability),
            ("TEXT_REPLY_PROBABILITY", self.policy.text_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                anyhow::bail!("{} must be within [0, 1], got {}", name, p);
            }
        }
        if self.policy.trigger_keyword.is_empty() {
            anyhow::bail!("TRIGGER_KEYWORD must not be empty");
        }
        if self.gemini_timeout.is_zero() {
            anyhow::bail!("GEMINI_TIMEOUT_SECS must be positive");
        }
        Ok(())
    }
}
