//! Index bounds: the engine always views a recorded snapshot.

use super::Invariant;
use crate::game::Game;

/// Invariant: the current index addresses an existing history entry.
///
/// Holds trivially for a fresh game (index 0, one entry) and is preserved
/// by every intent: accepted moves append before advancing, jumps are
/// bounds-checked, and reset returns to index 0 with one entry.
pub struct IndexInBoundsInvariant;

impl Invariant<Game> for IndexInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.current_index() < game.history_len()
    }

    fn description() -> &'static str {
        "the current index addresses a recorded history entry"
    }
}
