//! The history log: one board snapshot per ply, from game start onward.

use crate::types::Board;
use serde::{Deserialize, Serialize};

/// Ordered log of board snapshots.
///
/// Entry 0 is always the empty starting board and entry `i` adds exactly
/// one mark to entry `i - 1`, so the log is never empty and index `i` is
/// the position after `i` plies. Recorded entries are never mutated; the
/// only structural change besides appending is branching, which discards
/// an abandoned future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub(crate) entries: Vec<Board>,
}

impl History {
    /// Creates a fresh history holding the empty starting board.
    pub fn new() -> Self {
        Self {
            entries: vec![Board::new()],
        }
    }

    /// Number of recorded snapshots, always at least 1.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the snapshot at the given index.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.entries.get(index)
    }

    /// Returns all snapshots, oldest first.
    pub fn entries(&self) -> &[Board] {
        &self.entries
    }

    /// Discards every entry after `keep_through`, then appends `board`.
    ///
    /// This is the branching step: a move played from an earlier index
    /// overwrites the abandoned future in place of forking a second
    /// timeline. With `keep_through` at the latest index the truncation is
    /// a no-op and the call is a plain append.
    pub(crate) fn branch(&mut self, keep_through: usize, board: Board) {
        self.entries.truncate(keep_through + 1);
        self.entries.push(board);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
