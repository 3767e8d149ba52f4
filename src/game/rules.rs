//! Pure predicates over client-visible game state.
//!
//! Legality always comes from the engine's latest response; nothing here
//! re-derives Othello rules.

use super::types::{Board, Move, Outcome, Side, Winner};
use std::cmp::Ordering;

/// Membership test against the engine-reported legal move set.
pub fn is_legal(mv: Move, legal_moves: &[Move]) -> bool {
    legal_moves.contains(&mv)
}

/// Terminal result for `board`, or `None` while any cell is still empty.
///
/// Idempotent; callers recompute it on every session replacement rather than
/// caching across boards.
pub fn evaluate_outcome(board: &Board) -> Option<Outcome> {
    if !board.is_full() {
        return None;
    }
    let black = board.count(Side::Black);
    let white = board.count(Side::White);
    let winner = match black.cmp(&white) {
        Ordering::Greater => Winner::Black,
        Ordering::Less => Winner::White,
        Ordering::Equal => Winner::Draw,
    };
    Some(Outcome {
        winner,
        black,
        white,
    })
}
