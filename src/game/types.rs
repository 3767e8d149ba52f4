//! Core domain types for the Othello client.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// Side of play. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Black discs (the human under the standard opening).
    Black,
    /// White discs.
    White,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Decodes the engine's wire encoding (`1` black, `-1` white).
    pub fn from_wire(value: i8) -> Option<Self> {
        match value {
            1 => Some(Side::Black),
            -1 => Some(Side::White),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "BLACK"),
            Side::White => write!(f, "WHITE"),
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No disc placed.
    Empty,
    /// Cell occupied by a disc of the given side.
    Occupied(Side),
}

/// A candidate or played placement, zero-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index in `[0, N)`.
    pub row: usize,
    /// Column index in `[0, N)`.
    pub col: usize,
}

impl Move {
    /// Creates a move at (row, col).
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Square N×N Othello board, replaced wholesale on every engine response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Builds a board from row-major rows, rejecting non-square input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, &'static str> {
        let size = rows.len();
        if size == 0 {
            return Err("board is empty");
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err("board is not square");
            }
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col), or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Number of empty cells remaining.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Empty).count()
    }

    /// Number of discs owned by `side`.
    pub fn count(&self, side: Side) -> u32 {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(side))
            .count() as u32
    }

    /// True once no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

/// Disc tallies as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceCount {
    /// Black disc count.
    pub black: u32,
    /// White disc count.
    pub white: u32,
}

impl PieceCount {
    /// Creates a tally pair.
    pub fn new(black: u32, white: u32) -> Self {
        Self { black, white }
    }

    /// Total discs on the board.
    pub fn total(&self) -> u32 {
        self.black + self.white
    }
}

/// Winner of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// Black holds strictly more discs.
    Black,
    /// White holds strictly more discs.
    White,
    /// Equal disc counts.
    Draw,
}

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Side with strictly more discs, or a draw.
    pub winner: Winner,
    /// Final black tally.
    pub black: u32,
    /// Final white tally.
    pub white: u32,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Winner::Black => write!(f, "BLACK wins! ({} vs {})", self.black, self.white),
            Winner::White => write!(f, "WHITE wins! ({} vs {})", self.black, self.white),
            Winner::Draw => write!(f, "Draw ({} vs {})", self.black, self.white),
        }
    }
}

/// AI move-selection strategy served by the remote engine.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AgentKind {
    /// Uniform random move choice.
    Random,
    /// Maximizes immediate flips.
    Greedy,
    /// Depth-limited minimax search.
    #[default]
    Minimax,
    /// Minimax with a GA-trained evaluator.
    MinimaxGa,
    /// Monte Carlo tree search.
    Mcts,
    /// Greedy filter + minimax + optional MCTS refinement.
    Hybrid,
}

impl AgentKind {
    /// All selectable agents, in UI order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// The next agent in UI order, wrapping at the end.
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|a| *a == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Uppercase identifier used in log lines ("MINIMAX plays (2,3)").
    pub fn label(&self) -> String {
        self.to_string().to_uppercase()
    }

    /// One-line strategy description for the UI side panel.
    pub fn description(&self) -> &'static str {
        match self {
            AgentKind::Random => "Chooses moves randomly.",
            AgentKind::Greedy => "Maximizes immediate flips.",
            AgentKind::Minimax => "Searches future positions for best outcome.",
            AgentKind::MinimaxGa => "Minimax guided by a GA-trained evaluator.",
            AgentKind::Mcts => "Uses Monte Carlo rollouts to evaluate outcomes.",
            AgentKind::Hybrid => "Greedy filter + Minimax + optional MCTS refinement.",
        }
    }

    /// Explanation line for a placement this agent just made.
    pub fn explain(&self, mv: Move) -> String {
        match self {
            AgentKind::Random => format!("Played {mv} by random choice."),
            AgentKind::Greedy => format!("Played {mv} to maximize immediate flips."),
            AgentKind::Minimax => format!("Played {mv} after searching future states."),
            AgentKind::MinimaxGa => format!("Played {mv} using a GA-tuned evaluation."),
            AgentKind::Mcts => format!("Played {mv} using Monte Carlo rollout statistics."),
            AgentKind::Hybrid => format!("Played {mv} via Greedy + Minimax (+MCTS)."),
        }
    }
}
