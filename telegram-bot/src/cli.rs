//! CLI parser shared by bot binaries.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "toxic-ex-bot")]
#[command(about = "Telegram bot CLI", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (config from env; flags override BOT_TOKEN and PORT).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
}
