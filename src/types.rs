//! Core domain types: players, cells, the board, and recorded plies.

use serde::{Deserialize, Serialize};

/// A player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The first player. Marks `X` and always plays the even plies.
    A,
    /// The second player. Marks `O` and always plays the odd plies.
    B,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Returns the mark character this player places on the board.
    pub fn mark(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }

    /// Returns the player on turn for the given ply index.
    ///
    /// Turn order is a pure function of position in history: even plies
    /// belong to [`Player::A`], odd plies to [`Player::B`]. The engine keeps
    /// no separate turn flag, so rewinding history automatically restores
    /// the right side to move.
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 { Player::A } else { Player::B }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "PlayerA"),
            Player::B => write!(f, "PlayerB"),
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    Empty,
    /// A mark placed by the given player.
    Occupied(Player),
}

/// The 3x3 board, stored as nine cells in row-major order.
///
/// Cell indices map to the grid as:
///
/// ```text
/// 0 | 1 | 2
/// --+---+--
/// 3 | 4 | 5
/// --+---+--
/// 6 | 7 | 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed 0-8, row by row.
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from raw cells.
    ///
    /// Accepts any cell pattern, including boards unreachable through legal
    /// play; the outcome evaluator stays deterministic on those too.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index, or `None` past the board edge.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks whether the cell at the given index exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all nine cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the indices of all empty cells, in board order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| (*cell == Cell::Empty).then_some(index))
    }

    /// Converts a row/column pair (both 0-2) to a cell index.
    pub fn index_of(row: usize, col: usize) -> Option<usize> {
        (row < 3 && col < 3).then_some(row * 3 + col)
    }

    /// Places a mark. Callers validate index and emptiness first.
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        self.cells[index] = Cell::Occupied(player);
    }

    /// Returns the single placement turning `self` into `next`, if the two
    /// boards differ in exactly one cell that goes from empty to a mark.
    ///
    /// Any other difference (a removed mark, an overwritten mark, more than
    /// one change) yields `None`.
    pub fn single_placement(&self, next: &Board) -> Option<Ply> {
        let mut found = None;
        for (index, (before, after)) in self.cells.iter().zip(next.cells.iter()).enumerate() {
            if before == after {
                continue;
            }
            match (before, after, found) {
                (Cell::Empty, Cell::Occupied(player), None) => {
                    found = Some(Ply {
                        cell: index,
                        player: *player,
                    });
                }
                _ => return None,
            }
        }
        found
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                write!(f, "\n-+-+-\n")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * 3 + col] {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Occupied(player) => write!(f, "{}", player.mark())?,
                }
            }
        }
        Ok(())
    }
}

/// The record of one placement: a player marking a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ply {
    /// The cell that received the mark.
    pub cell: usize,
    /// The player who placed it.
    pub player: Player,
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> cell {}", self.player, self.cell)
    }
}
