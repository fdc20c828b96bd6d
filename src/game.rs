//! The game engine: moves, history navigation, reset, and read views.

use crate::history::History;
use crate::invariants;
use crate::rules::{self, Line, Outcome};
use crate::status::Status;
use crate::types::{Board, Player, Ply};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a move intent would be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a board cell.
    #[display("no cell at index {}", _0)]
    NoSuchCell(usize),
    /// The cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(usize),
    /// The viewed board shows a win or a draw.
    #[display("game is already decided")]
    GameDecided,
}

impl std::error::Error for MoveError {}

/// Why a history jump intent would be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The target index lies outside the recorded history.
    #[display("history index {} is out of bounds (length {})", index, len)]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The history length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// The engine: a history of board snapshots plus the index currently
/// viewed and played from.
///
/// These two fields are the whole state. The side to move is derived from
/// the index parity, the outcome and status are recomputed from the viewed
/// board on every read, and invalid intents are ignored without touching
/// state. Cloning a [`Game`] snapshots the entire session, and the serde
/// derives persist it losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) history: History,
    pub(crate) current: usize,
}

impl Game {
    /// Creates a fresh game: one empty board in history, index 0,
    /// [`Player::A`] to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current: 0,
        }
    }

    /// Rebuilds a game by applying the given cells as successive plies.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered; no partially replayed game
    /// is handed back.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut game = Game::new();
        for &cell in cells {
            game.validate_move(cell)?;
            game.commit(cell);
        }
        Ok(game)
    }

    // ────────────────────────────────────────────────────────────────
    //  Intents
    // ────────────────────────────────────────────────────────────────

    /// Applies a move at `cell` for the player on turn.
    ///
    /// Rejected moves come back as `false` with state untouched; the
    /// reason is logged at debug level but never surfaced as an error.
    /// A move is rejected when the viewed board is already decided, the
    /// index names no cell, or the cell is occupied.
    ///
    /// On acceptance the entries after the current index are discarded,
    /// the new snapshot is appended, and the index advances onto it. When
    /// the view sits at the latest entry this is a plain append.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn apply_move(&mut self, cell: usize) -> bool {
        match self.validate_move(cell) {
            Ok(()) => {
                self.commit(cell);
                true
            }
            Err(reason) => {
                debug!(%reason, cell, "move ignored");
                false
            }
        }
    }

    /// Moves the view to `index` in history.
    ///
    /// Out-of-range targets come back as `false` with state untouched.
    /// Navigation alone never alters history; only a later accepted move
    /// truncates the abandoned future.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> bool {
        match self.validate_jump(index) {
            Ok(()) => {
                debug!(from = self.current, to = index, "jumped in history");
                self.current = index;
                invariants::debug_assert_invariants(self);
                true
            }
            Err(reason) => {
                debug!(%reason, "jump ignored");
                false
            }
        }
    }

    /// Restarts from scratch: a single empty board at index 0, with the
    /// whole history discarded.
    ///
    /// Always succeeds, at any point of the game, and is idempotent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.history.len() - 1, "game reset");
        self.history = History::new();
        self.current = 0;
        invariants::debug_assert_invariants(self);
    }

    /// Applies a validated move.
    fn commit(&mut self, cell: usize) {
        let ply = self.current;
        let player = Player::for_ply(ply);
        let mut board = self.current_board().clone();
        board.place(cell, player);
        let outcome = rules::evaluate(&board);

        self.history.branch(ply, board);
        self.current = ply + 1;
        debug!(cell, %player, ply, "mark placed");
        if outcome.is_decided() {
            info!(%outcome, "game decided");
        }
        invariants::debug_assert_invariants(self);
    }

    // ────────────────────────────────────────────────────────────────
    //  Validation
    // ────────────────────────────────────────────────────────────────

    /// Checks whether a move at `cell` would be accepted, without applying
    /// it.
    ///
    /// # Errors
    ///
    /// Explains why [`apply_move`](Game::apply_move) would ignore the move.
    pub fn validate_move(&self, cell: usize) -> Result<(), MoveError> {
        if self.is_decided() {
            return Err(MoveError::GameDecided);
        }
        if cell >= Board::CELLS {
            return Err(MoveError::NoSuchCell(cell));
        }
        if !self.current_board().is_empty(cell) {
            return Err(MoveError::CellOccupied(cell));
        }
        Ok(())
    }

    /// Checks whether a jump to `index` would be accepted.
    ///
    /// # Errors
    ///
    /// Explains why [`jump_to`](Game::jump_to) would ignore the jump.
    pub fn validate_jump(&self, index: usize) -> Result<(), JumpError> {
        if index >= self.history.len() {
            return Err(JumpError::OutOfRange {
                index,
                len: self.history.len(),
            });
        }
        Ok(())
    }

    // ────────────────────────────────────────────────────────────────
    //  Read views
    // ────────────────────────────────────────────────────────────────

    /// The board at the current index.
    pub fn current_board(&self) -> &Board {
        self.history
            .get(self.current)
            .expect("current index stays within history")
    }

    /// The outcome of the viewed board, recomputed on every read.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.current_board())
    }

    /// The user-facing status of the viewed board.
    pub fn status(&self) -> Status {
        Status::from_outcome(self.outcome(), self.to_move())
    }

    /// The cell indices of the completed line on the viewed board, for
    /// highlighting.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.outcome().line().map(Line::cells)
    }

    /// The player on turn at the current index: [`Player::A`] on even
    /// indices, [`Player::B`] on odd.
    ///
    /// Defined for decided boards too; [`status`](Game::status) is the view
    /// that accounts for the outcome.
    pub fn to_move(&self) -> Player {
        Player::for_ply(self.current)
    }

    /// True once the viewed board shows a win or a draw.
    pub fn is_decided(&self) -> bool {
        self.outcome().is_decided()
    }

    /// Number of snapshots in history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The index currently viewed and played from.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The recorded history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Cells that would currently accept a move, in board order.
    ///
    /// Empty once the viewed board is decided.
    pub fn valid_moves(&self) -> Vec<usize> {
        if self.is_decided() {
            return Vec::new();
        }
        self.current_board().empty_cells().collect()
    }

    /// The ply that produced the viewed board, or `None` at index 0.
    pub fn last_move(&self) -> Option<Ply> {
        if self.current == 0 {
            return None;
        }
        let before = self.history.get(self.current - 1)?;
        before.single_placement(self.current_board())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
