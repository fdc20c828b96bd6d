//! Outcome evaluation rules.
//!
//! Rules are pure functions over a [`Board`]. They carry no state of their
//! own, so they can be probed with any cell pattern, including positions
//! unreachable through legal play, and always return the same answer for
//! the same board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, winning_line};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The decided or undecided state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game is still open.
    Undecided,
    /// A player completed a line.
    Win {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// The board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the completed line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once the game is decided, by win or by draw.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "undecided"),
            Outcome::Win { player, line } => write!(f, "{player} wins on the {line}"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Evaluates a board into an outcome.
///
/// Checks the eight lines in [`Line`] declaration order, then falls back to
/// draw detection. A win always takes precedence over fullness. Runs in
/// constant time: eight lines of three cells each.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = win::winning_line(board) {
        return Outcome::Win { player, line };
    }
    if draw::is_full(board) {
        return Outcome::Draw;
    }
    Outcome::Undecided
}
