//! Draw detection: a full board with no completed line.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks whether every cell on the board is occupied.
///
/// Fullness alone does not decide a draw; the caller must rule out a win
/// first. [`crate::rules::evaluate`] does both in the right order.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_board_is_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_board_with_one_gap_is_not_full() {
        let mut cells = [Cell::Occupied(Player::A); 9];
        cells[5] = Cell::Empty;
        assert!(!is_full(&Board::from_cells(cells)));
    }

    #[test]
    fn test_fully_marked_board_is_full() {
        let mut board = Board::new();
        for cell in 0..9 {
            board.place(cell, Player::for_ply(cell));
        }
        assert!(is_full(&board));
    }
}
