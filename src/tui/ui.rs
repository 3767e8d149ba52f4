//! Stateless rendering of the orchestrator state.

use crate::game::{Cell, Move, Side};
use crate::orchestrator::{Orchestrator, Phase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Renders the full client screen.
pub fn draw<S>(frame: &mut Frame, orchestrator: &Orchestrator<S>, cursor: (usize, usize)) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Board + side panel
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Othello - Human vs Remote AI")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(46)])
        .split(chunks[1]);

    draw_board(frame, columns[0], orchestrator, cursor);
    draw_panel(frame, columns[1], orchestrator);

    let status = Paragraph::new(status_line(orchestrator))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_board<S>(
    frame: &mut Frame,
    area: Rect,
    orchestrator: &Orchestrator<S>,
    cursor: (usize, usize),
) {
    let block = Block::default().title("Board").borders(Borders::ALL);
    let Some(session) = orchestrator.session() else {
        let placeholder = Paragraph::new("No session - press 'n' to start")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let board = session.board();
    let mut lines = Vec::with_capacity(board.size());
    for row in 0..board.size() {
        let mut spans = Vec::with_capacity(board.size());
        for col in 0..board.size() {
            let (symbol, mut style) = match board.get(row, col) {
                Some(Cell::Occupied(Side::Black)) => (
                    "● ",
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Some(Cell::Occupied(Side::White)) => ("○ ", Style::default().fg(Color::Gray)),
                _ if session.is_legal(Move::new(row, col)) => {
                    ("+ ", Style::default().fg(Color::Green))
                }
                _ => ("· ", Style::default().fg(Color::DarkGray)),
            };
            if (row, col) == cursor {
                style = style.bg(Color::Blue);
            }
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_panel<S>(frame: &mut Frame, area: Rect, orchestrator: &Orchestrator<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Game facts
            Constraint::Length(4), // Agent
            Constraint::Length(4), // Reasoning
            Constraint::Min(4),    // Log
        ])
        .split(area);

    let mut facts = Vec::new();
    if let Some(session) = orchestrator.session() {
        facts.push(Line::from(format!("Turn: {}", session.to_move())));
        facts.push(Line::from(format!(
            "Black: {}  White: {}",
            session.pieces().black,
            session.pieces().white
        )));
    }
    frame.render_widget(
        Paragraph::new(facts).block(Block::default().title("Game").borders(Borders::ALL)),
        rows[0],
    );

    let agent = orchestrator.agent();
    let agent_lines = vec![
        Line::from(format!("{} (Tab to change)", agent.label())),
        Line::from(agent.description()),
    ];
    frame.render_widget(
        Paragraph::new(agent_lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("AI Strategy").borders(Borders::ALL)),
        rows[1],
    );

    let reasoning = orchestrator.explanation().unwrap_or("Waiting...");
    frame.render_widget(
        Paragraph::new(reasoning)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("AI Move Reasoning")
                    .borders(Borders::ALL),
            ),
        rows[2],
    );

    // Tail of the append-only log, newest at the bottom.
    let visible = rows[3].height.saturating_sub(2) as usize;
    let log_lines: Vec<Line> = orchestrator
        .log()
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|entry| Line::from(entry.as_str()))
        .collect();
    frame.render_widget(
        Paragraph::new(log_lines).block(Block::default().title("Log").borders(Borders::ALL)),
        rows[3],
    );
}

fn status_line<S>(orchestrator: &Orchestrator<S>) -> String {
    match orchestrator.phase() {
        Phase::Idle => "Press 'n' for a new game, 'q' to quit".to_string(),
        Phase::HumanTurn => {
            let forced_pass = orchestrator
                .session()
                .map(|s| s.must_pass())
                .unwrap_or(false);
            if forced_pass {
                "No legal moves - press 's' to skip".to_string()
            } else {
                "Your move: arrows + Enter | 's' skip | Tab agent | 'n' new | 'q' quit".to_string()
            }
        }
        Phase::AiTurn => {
            if orchestrator.thinking() {
                format!("{} is thinking...", orchestrator.agent().label())
            } else {
                "AI move failed - press 'a' to retry".to_string()
            }
        }
        Phase::GameOver => match orchestrator.session().and_then(|s| s.outcome().as_ref()) {
            Some(outcome) => format!("{outcome} - press 'n' for a new game"),
            None => "Game over".to_string(),
        },
    }
}
