//! Win detection: scanning the eight lines for three matching marks.

use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight lines that can decide the game.
///
/// Declaration order doubles as the tie-break order: rows top to bottom,
/// then columns left to right, then the two diagonals. [`winning_line`]
/// reports the first satisfied line in this order, which keeps the result
/// deterministic even for boards with several complete lines (unreachable
/// in legal play, but representable through [`Board::from_cells`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Line {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    MiddleColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// Returns the three cell indices forming this line.
    pub const fn cells(self) -> [usize; 3] {
        match self {
            Line::TopRow => [0, 1, 2],
            Line::MiddleRow => [3, 4, 5],
            Line::BottomRow => [6, 7, 8],
            Line::LeftColumn => [0, 3, 6],
            Line::MiddleColumn => [1, 4, 7],
            Line::RightColumn => [2, 5, 8],
            Line::MainDiagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Line::TopRow => "top row",
            Line::MiddleRow => "middle row",
            Line::BottomRow => "bottom row",
            Line::LeftColumn => "left column",
            Line::MiddleColumn => "middle column",
            Line::RightColumn => "right column",
            Line::MainDiagonal => "main diagonal",
            Line::AntiDiagonal => "anti-diagonal",
        };
        write!(f, "{name}")
    }
}

/// Checks the board for a completed line.
///
/// Returns the winning player together with the line, or `None` if no line
/// holds three matching marks. Lines are checked in [`Line`] declaration
/// order and the first match wins.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    for line in Line::iter() {
        let [a, b, c] = line.cells();
        let cell = board.cells()[a];
        if cell != Cell::Empty && cell == board.cells()[b] && cell == board.cells()[c] {
            return match cell {
                Cell::Occupied(player) => Some((player, line)),
                Cell::Empty => None,
            };
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        assert!(winning_line(&Board::new()).is_none());
    }

    #[test]
    fn test_incomplete_line_has_no_winner() {
        let mut board = Board::new();
        board.place(0, Player::A);
        board.place(1, Player::A);
        assert!(winning_line(&board).is_none());
    }

    #[test]
    fn test_mixed_line_has_no_winner() {
        let mut board = Board::new();
        board.place(0, Player::A);
        board.place(1, Player::B);
        board.place(2, Player::A);
        assert!(winning_line(&board).is_none());
    }

    #[test]
    fn test_bottom_row_win() {
        let mut board = Board::new();
        board.place(6, Player::B);
        board.place(7, Player::B);
        board.place(8, Player::B);
        assert_eq!(winning_line(&board), Some((Player::B, Line::BottomRow)));
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new();
        board.place(1, Player::A);
        board.place(4, Player::A);
        board.place(7, Player::A);
        assert_eq!(winning_line(&board), Some((Player::A, Line::MiddleColumn)));
    }

    #[test]
    fn test_diagonal_win() {
        let mut board = Board::new();
        board.place(2, Player::A);
        board.place(4, Player::A);
        board.place(6, Player::A);
        assert_eq!(winning_line(&board), Some((Player::A, Line::AntiDiagonal)));
    }

    #[test]
    fn test_multiple_lines_tie_break_on_declaration_order() {
        // Every line is complete; the first declared line must win.
        let board = Board::from_cells([Cell::Occupied(Player::A); 9]);
        assert_eq!(winning_line(&board), Some((Player::A, Line::TopRow)));

        // A column and a row complete at once; the row is declared first.
        let mut board = Board::new();
        for cell in [0, 1, 2, 3, 6] {
            board.place(cell, Player::B);
        }
        assert_eq!(winning_line(&board), Some((Player::B, Line::TopRow)));
    }

    #[test]
    fn test_line_cells_cover_the_board() {
        let mut seen = [false; 9];
        for line in Line::iter() {
            for cell in line.cells() {
                seen[cell] = true;
            }
        }
        assert!(seen.iter().all(|covered| *covered));
        assert_eq!(Line::iter().count(), 8);
    }
}
