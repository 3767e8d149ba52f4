//! Domain types and pure rules for the Othello client.

mod rules;
mod types;

pub use rules::{evaluate_outcome, is_legal};
pub use types::{AgentKind, Board, Cell, Move, Outcome, PieceCount, Side, Winner};
