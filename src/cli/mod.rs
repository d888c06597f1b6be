use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Start a chat session
    Chat {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Pick up a .env file if one is present
    dotenv::dotenv().ok();

    // Missing required config is fatal before any session starts
    let config = AppConfig::from_env()?;

    // Handle each sub command
    match args.command {
        Some(Command::Chat {}) | None => {
            chat::run(&config).await?;
        }
    }

    Ok(())
}
