//! The user-facing status projection.

use crate::rules::Outcome;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Game status as the presentation layer shows it.
///
/// Never stored: the engine derives it on demand from the outcome of the
/// board at the current index and the side to move, so it always matches
/// the position being viewed, including after jumps through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The given player completed a line.
    Win(Player),
    /// The board is full with no winner.
    Draw,
    /// The game is open and the given player moves next.
    NextTurn(Player),
}

impl Status {
    /// Projects an outcome and the side to move into a status.
    pub fn from_outcome(outcome: Outcome, to_move: Player) -> Self {
        match outcome {
            Outcome::Win { player, .. } => Status::Win(player),
            Outcome::Draw => Status::Draw,
            Outcome::Undecided => Status::NextTurn(to_move),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Win(player) => write!(f, "Win by {player}"),
            Status::Draw => write!(f, "Draw"),
            Status::NextTurn(player) => write!(f, "Next turn: {player}"),
        }
    }
}
