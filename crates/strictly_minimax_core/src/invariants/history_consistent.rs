//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::{Game, Square};

/// Invariant: history length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let occupied = game
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        game.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_multiple_turns_hold() {
        let mut game = Game::new();
        game.submit_human_move(0).unwrap();
        game.submit_human_move(8).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_unlogged_square_violates() {
        let mut game = Game::new();
        game.submit_human_move(4).unwrap();
        let free: Position = game.board.empty_cells()[0];
        game.board.set(free, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
