//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! The engine is a plain synchronous state machine: a log of board
//! snapshots plus the index currently viewed and played from. A
//! presentation layer (out of scope here) reads state through the view
//! methods and forwards user intents as ordinary method calls: a cell
//! click becomes [`Game::apply_move`], a history button becomes
//! [`Game::jump_to`], a restart becomes [`Game::reset`]. Invalid intents
//! are ignored without an error surface, and the side to move is always
//! derived from the index parity, so history plus index is the single
//! source of truth.
//!
//! # Architecture
//!
//! - [`Board`]: nine cells in row-major order.
//! - [`History`]: the snapshot log; a move made after rewinding discards
//!   the abandoned future instead of forking a second timeline.
//! - [`rules`]: pure outcome evaluation over a board.
//! - [`Game`]: the engine holding history plus current index.
//! - [`Status`]: the derived, user-facing projection.
//! - [`invariants`]: first-class, independently checkable engine
//!   guarantees.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Cell, Game, Player, Status};
//!
//! let mut game = Game::new();
//! assert!(game.apply_move(0)); // PlayerA takes the top-left corner
//! assert!(game.apply_move(4)); // PlayerB answers in the center
//! assert_eq!(game.history_len(), 3);
//!
//! // Time travel: view the position after the first ply.
//! assert!(game.jump_to(1));
//! assert_eq!(game.status(), Status::NextTurn(Player::B));
//!
//! // A new move from the past discards the abandoned future.
//! assert!(game.apply_move(8));
//! assert_eq!(game.history_len(), 3);
//! assert_eq!(game.current_board().get(4), Some(Cell::Empty));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod history;
mod status;
mod types;

pub mod invariants;
pub mod rules;

// Engine and intents
pub use game::{Game, JumpError, MoveError};

// State and views
pub use history::History;
pub use status::Status;
pub use types::{Board, Cell, Player, Ply};

// Outcome evaluation
pub use rules::{Line, Outcome, evaluate, is_full, winning_line};
