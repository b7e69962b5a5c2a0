//! Alternating turn invariant: the two players take strict turns.

use super::Invariant;
use crate::Game;

/// Invariant: the move log alternates players, starting with the
/// configured opener.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return true;
        };
        if first.player != game.first_player().player() {
            return false;
        }

        history
            .windows(2)
            .all(|pair| pair[0].player != pair[1].player)
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the opener"
    }
}
