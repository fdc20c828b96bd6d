//! Turn alternation: recorded plies belong to the right player.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: the mark added by ply `k` belongs to the player on turn at
/// ply `k`, [`Player::A`] for even `k` and [`Player::B`] for odd.
///
/// Together with history coherence this pins the whole ply sequence: the
/// first recorded mark is PlayerA's and the sides strictly alternate.
pub struct AlternatingMarksInvariant;

impl Invariant<Game> for AlternatingMarksInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .entries()
            .windows(2)
            .enumerate()
            .all(|(ply, pair)| match pair[0].single_placement(&pair[1]) {
                Some(placement) => placement.player == Player::for_ply(ply),
                // Not a single placement: history coherence flags that.
                None => true,
            })
    }

    fn description() -> &'static str {
        "recorded plies alternate starting with PlayerA"
    }
}
