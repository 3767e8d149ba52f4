//! Command-line interface for the Othello client.

use clap::Parser;
use othello_tui::AgentKind;
use std::path::PathBuf;

/// Othello terminal client for a remote AI engine
#[derive(Parser, Debug)]
#[command(name = "othello_tui")]
#[command(about = "Play Othello against remote AI agents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the client configuration file
    #[arg(short, long, default_value = "othello_client.toml")]
    pub config: PathBuf,

    /// Engine base URL (overrides the config file)
    #[arg(long)]
    pub server_url: Option<String>,

    /// Agent to play against (overrides the config file)
    #[arg(long)]
    pub agent: Option<AgentKind>,
}
