//! toxic-ex-bot: entry point. Loads `.env`, parses the CLI, loads config and runs the bot.

use anyhow::Result;
use clap::Parser;
use telegram_bot::{Cli, Commands};
use toxic_ex_bot::{run_toxic_bot, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, port } => {
            let config = AppConfig::load(token, port)?;
            run_toxic_bot(config).await
        }
    }
}
