//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::{Board, Player};

/// True iff the board is full and neither player owns a line.
///
/// A full board can still be a win, so callers that need to tell the two
/// apart check [`check_win`] first.
pub fn check_tie(board: &Board) -> bool {
    board.is_full()
        && check_win(board, Player::X).is_none()
        && check_win(board, Player::O).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_tie() {
        assert!(!check_tie(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_tie() {
        let board = Board::from_cells("XOX_O____").unwrap();
        assert!(!check_tie(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_cells("XOXOXXOXO").unwrap();
        assert!(check_tie(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        // X X X / O O X / X O O
        let board = Board::from_cells("XXXOOXXOO").unwrap();
        assert!(board.is_full());
        assert!(!check_tie(&board));
    }
}
