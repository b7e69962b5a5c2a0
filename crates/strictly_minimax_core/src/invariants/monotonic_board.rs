//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: the board is exactly what replaying the move log produces.
///
/// Each logged move must land on an empty square, so no square is ever
/// overwritten, and no square is filled without a logged move.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.place_at(mov.position, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
