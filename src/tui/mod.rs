//! Terminal UI for the Othello client.

mod input;
mod ui;

use crate::client_config::ClientConfig;
use crate::http_client::HttpGameClient;
use crate::orchestrator::Orchestrator;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::{error, info};

/// Runs the terminal client against the configured engine.
pub async fn run_tui(config: ClientConfig) -> Result<()> {
    // Log to a file so tracing output does not fight the terminal UI.
    let log_file = std::fs::File::create("othello_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(server_url = %config.server_url(), agent = %config.agent(), "Starting Othello TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let client = HttpGameClient::new(config.server_url().clone());
    let mut orchestrator = Orchestrator::new(client, *config.agent(), *config.ai_time_budget());

    let res = run_loop(&mut terminal, &mut orchestrator).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Event loop: render, auto-invoke owed AI moves, then dispatch key intents.
async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    orchestrator: &mut Orchestrator<HttpGameClient>,
) -> Result<()> {
    let mut cursor = (0usize, 0usize);

    orchestrator.new_game().await;

    loop {
        terminal.draw(|frame| ui::draw(frame, orchestrator, cursor))?;

        // The engine owes us a move; the thinking frame is already up.
        if orchestrator.needs_ai() {
            orchestrator.invoke_ai().await;
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let size = orchestrator
                    .session()
                    .map(|s| s.board().size())
                    .unwrap_or(8);
                match key.code {
                    KeyCode::Char('q') => {
                        info!("User quit");
                        return Ok(());
                    }
                    KeyCode::Char('n') => orchestrator.new_game().await,
                    KeyCode::Char('s') => orchestrator.skip_turn().await,
                    KeyCode::Char('a') => orchestrator.retry_ai(),
                    KeyCode::Char('f') => orchestrator.refresh().await,
                    KeyCode::Tab => {
                        let next = orchestrator.agent().next();
                        orchestrator.select_agent(next);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        orchestrator.play_cell(cursor.0, cursor.1).await;
                    }
                    KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                        cursor = input::move_cursor(cursor, key.code, size);
                    }
                    _ => {}
                }
            }
        }
    }
}
