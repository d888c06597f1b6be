use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::chat::{Channel, SessionStore, TerminalChannel, handle_turn, write_transcript};
use crate::core::AppConfig;

/// Runs an interactive chat session: welcome the user, process each
/// line as one turn in arrival order, and flush the transcript when the
/// session ends.
pub async fn run(config: &AppConfig) -> Result<()> {
    // If using the CLI only and not the webserver, set up tracing to
    // output to stdout and stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut rl = DefaultEditor::new()?;
    let mut channel = TerminalChannel::new();
    let mut store = SessionStore::new();

    // Session start
    channel.send(&config.welcome_message)?;

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                handle_turn(
                    &mut channel,
                    &mut store,
                    &line,
                    &config.api_hostname,
                    &config.api_key,
                    &config.model,
                )
                .await?;
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    // Session end
    write_transcript(Path::new(&config.transcript_path), store.messages())?;
    tracing::info!("Chat history saved to {}", config.transcript_path);

    Ok(())
}
