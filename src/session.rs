//! Client-side session state: the single source of truth between responses.

use crate::game::{evaluate_outcome, is_legal, Board, Move, Outcome, PieceCount, Side};
use derive_getters::Getters;
use tracing::debug;

/// One in-progress or completed game as perceived by the client.
///
/// Every field comes from a single engine response; sessions are replaced
/// wholesale, never patched field-by-field, so a board from response N can
/// never be observed next to legal moves from response N-1.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Session {
    /// Server-issued game id.
    id: String,
    /// Board grid from the latest response.
    board: Board,
    /// Side whose turn is current.
    to_move: Side,
    /// Legal placements for `to_move`, authoritative from the engine.
    legal_moves: Vec<Move>,
    /// Disc tallies from the latest response.
    pieces: PieceCount,
    /// Terminal result, derived client-side from the board.
    outcome: Option<Outcome>,
}

impl Session {
    /// Builds a session from a decoded response.
    ///
    /// The outcome is recomputed from the board here, independent of any
    /// terminal flag the engine may or may not report.
    pub fn new(
        id: String,
        board: Board,
        to_move: Side,
        legal_moves: Vec<Move>,
        pieces: PieceCount,
    ) -> Self {
        let outcome = evaluate_outcome(&board);
        Self {
            id,
            board,
            to_move,
            legal_moves,
            pieces,
            outcome,
        }
    }

    /// True once the board is full and the outcome is set.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Membership test against the current legal move set.
    pub fn is_legal(&self, mv: Move) -> bool {
        is_legal(mv, &self.legal_moves)
    }

    /// True when the side to move has no placement and must pass.
    pub fn must_pass(&self) -> bool {
        self.legal_moves.is_empty() && !self.is_over()
    }
}

/// Holds at most one live session.
///
/// No locking: the orchestrator guarantees a single in-flight request, so
/// replacement and reads never race.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<Session>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a freshly received session, discarding the previous one.
    pub fn replace(&mut self, session: Session) {
        debug!(game_id = %session.id(), to_move = %session.to_move(), "Replacing session state");
        self.current = Some(session);
    }

    /// The latest session, if any.
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}
