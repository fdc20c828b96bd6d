//! Property-based tests for the outcome evaluator and the engine's
//! guarantees under arbitrary intent sequences.

use proptest::prelude::*;
use tictactoe_rewind::invariants::{GameInvariants, InvariantSet};
use tictactoe_rewind::{Board, Cell, Game, Outcome, Player, evaluate, is_full};

prop_compose! {
    fn arbitrary_cell()(variant in 0..3u8) -> Cell {
        match variant {
            0 => Cell::Empty,
            1 => Cell::Occupied(Player::A),
            _ => Cell::Occupied(Player::B),
        }
    }
}

prop_compose! {
    fn arbitrary_board()(cells in prop::collection::vec(arbitrary_cell(), 9)) -> Board {
        let mut raw = [Cell::Empty; 9];
        for (slot, cell) in raw.iter_mut().zip(cells) {
            *slot = cell;
        }
        Board::from_cells(raw)
    }
}

/// One user intent as a presentation layer would forward it, including
/// out-of-range indices.
#[derive(Debug, Clone, Copy)]
enum Intent {
    Move(usize),
    Jump(usize),
    Reset,
}

prop_compose! {
    fn arbitrary_intent()(kind in 0..6u8, raw in 0..12usize) -> Intent {
        match kind {
            0 | 1 | 2 => Intent::Move(raw),
            3 | 4 => Intent::Jump(raw),
            _ => Intent::Reset,
        }
    }
}

fn drive(intents: &[Intent]) -> Game {
    let mut game = Game::new();
    for intent in intents {
        match *intent {
            Intent::Move(cell) => {
                game.apply_move(cell);
            }
            Intent::Jump(index) => {
                game.jump_to(index);
            }
            Intent::Reset => game.reset(),
        }
    }
    game
}

proptest! {
    #[test]
    fn test_evaluator_is_deterministic_and_single_classed(board in arbitrary_board()) {
        let first = evaluate(&board);
        let second = evaluate(&board);
        prop_assert_eq!(first, second);

        match first {
            Outcome::Win { player, line } => {
                for cell in line.cells() {
                    prop_assert_eq!(board.get(cell), Some(Cell::Occupied(player)));
                }
            }
            Outcome::Draw => prop_assert!(is_full(&board)),
            Outcome::Undecided => prop_assert!(!is_full(&board)),
        }
    }

    #[test]
    fn test_any_intent_sequence_preserves_the_invariants(
        intents in prop::collection::vec(arbitrary_intent(), 0..40)
    ) {
        let game = drive(&intents);

        prop_assert!(GameInvariants::check_all(&game).is_ok());
        prop_assert!(game.current_index() < game.history_len());
        prop_assert!(game.history_len() <= 10);
    }

    #[test]
    fn test_accepted_moves_keep_history_one_past_the_index(
        cells in prop::collection::vec(0..9usize, 0..12)
    ) {
        let mut game = Game::new();
        for cell in cells {
            if game.apply_move(cell) {
                prop_assert_eq!(game.history_len(), game.current_index() + 1);
            }
        }
    }

    #[test]
    fn test_rejected_intents_leave_the_game_untouched(
        intents in prop::collection::vec(arbitrary_intent(), 0..20),
        cell in 0..12usize,
        index in 0..12usize
    ) {
        let mut game = drive(&intents);

        if game.validate_move(cell).is_err() {
            let snapshot = game.clone();
            prop_assert!(!game.apply_move(cell));
            prop_assert_eq!(&game, &snapshot);
        }
        if game.validate_jump(index).is_err() {
            let snapshot = game.clone();
            prop_assert!(!game.jump_to(index));
            prop_assert_eq!(&game, &snapshot);
        }
    }

    #[test]
    fn test_plies_alternate_with_the_index_parity(
        cells in prop::collection::vec(0..9usize, 0..12)
    ) {
        let mut game = Game::new();
        for cell in cells {
            let on_turn = game.to_move();
            let before = game.current_index();
            if game.apply_move(cell) {
                prop_assert_eq!(Player::for_ply(before), on_turn);
                prop_assert_eq!(game.last_move().map(|ply| ply.player), Some(on_turn));
            }
        }
    }

    #[test]
    fn test_decided_games_accept_no_further_moves(
        cells in prop::collection::vec(0..9usize, 0..20)
    ) {
        let mut game = Game::new();
        for cell in cells {
            let decided = game.is_decided();
            let accepted = game.apply_move(cell);
            if decided {
                prop_assert!(!accepted);
            }
        }
        // A full undecided board cannot exist, so the two sides coincide.
        prop_assert_eq!(game.valid_moves().is_empty(), game.is_decided());
    }
}
