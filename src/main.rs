use anyhow::Result;
use companion::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
