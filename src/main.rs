//! Othello terminal client binary.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use othello_tui::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = if cli.config.exists() {
        ClientConfig::from_file(&cli.config)?
    } else {
        ClientConfig::default()
    };
    if let Some(url) = cli.server_url {
        config = config.with_server_url(url);
    }
    if let Some(agent) = cli.agent {
        config = config.with_agent(agent);
    }

    othello_tui::run_tui(config).await
}
