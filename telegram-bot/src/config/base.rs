//! Base config: Telegram Bot connection, logging, liveness port. Loaded from env.

use anyhow::Result;
use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILE: &str = "logs/toxic-ex-bot.log";

/// Framework-level settings shared by every bot built on this crate.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// PORT; the liveness server listens here
    pub port: u16,
}

impl BaseConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN and `port` overrides PORT.
    /// Fails when no token is available from either source.
    pub fn load(token: Option<String>, port: Option<u16>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let port = match port {
            Some(p) => p,
            None => match env::var("PORT") {
                Ok(s) => s
                    .parse()
                    .map_err(|_| anyhow::anyhow!("PORT is not a valid port number: {}", s))?,
                Err(_) => DEFAULT_PORT,
            },
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            port,
        })
    }

    /// Checks the token is non-blank and telegram_api_url parses if set.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
