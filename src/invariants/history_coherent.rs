//! History coherence: snapshots form a chain of single placements.

use super::Invariant;
use crate::game::Game;
use crate::types::Board;

/// Invariant: history entry 0 is the empty board and every later entry
/// adds exactly one mark to its predecessor.
///
/// Recorded marks are never moved, removed, or overwritten between
/// snapshots. Checked by diffing each consecutive pair of entries.
pub struct HistoryCoherentInvariant;

impl Invariant<Game> for HistoryCoherentInvariant {
    fn holds(game: &Game) -> bool {
        let entries = game.history().entries();

        let Some(first) = entries.first() else {
            return false;
        };
        if *first != Board::new() {
            return false;
        }

        entries
            .windows(2)
            .all(|pair| pair[0].single_placement(&pair[1]).is_some())
    }

    fn description() -> &'static str {
        "every history entry adds exactly one mark to its predecessor"
    }
}
