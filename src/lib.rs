//! Othello terminal client: turn orchestration against a remote AI engine.
//!
//! The remote engine owns the rules and the AI agents; this crate keeps a
//! single game session consistent across alternating human and AI turns.
//!
//! # Architecture
//!
//! - **Game types**: board, sides, moves, outcomes ([`game`])
//! - **Session**: client-side source of truth, replaced wholesale from
//!   engine responses ([`Session`], [`SessionStore`])
//! - **Service**: typed boundary to the remote engine ([`GameService`],
//!   with the HTTP implementation [`HttpGameClient`])
//! - **Orchestrator**: the human-turn / AI-turn / game-over state machine
//!   ([`Orchestrator`])
//! - **TUI**: ratatui presentation layer driving the orchestrator
//!   ([`run_tui`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod game;

mod client_config;
mod http_client;
mod orchestrator;
mod service;
mod session;
mod tui;

// Crate-level exports - configuration
pub use client_config::{ClientConfig, ConfigError};

// Crate-level exports - game types and pure rules
pub use game::{
    evaluate_outcome, is_legal, AgentKind, Board, Cell, Move, Outcome, PieceCount, Side, Winner,
};

// Crate-level exports - service boundary
pub use http_client::HttpGameClient;
pub use service::{AiMove, GameService, ServiceError};

// Crate-level exports - session state
pub use session::{Session, SessionStore};

// Crate-level exports - orchestration
pub use orchestrator::{Orchestrator, Phase};

// Crate-level exports - terminal UI
pub use tui::run_tui;
