//! Tests for win and tie detection.

use strictly_minimax_core::{
    Board, Player, Position, Square, WINNING_LINES, WinningLine, check_tie, check_win,
};

/// Every board reachable by filling cells with X, O or empty (3^9 boards).
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut board = Board::new();
        for pos in Position::ALL {
            match code % 3 {
                1 => board.place_at(pos, Player::X).unwrap(),
                2 => board.place_at(pos, Player::O).unwrap(),
                _ => {}
            }
            code /= 3;
        }
        board
    })
}

fn owns_line(board: &Board, player: Player, line: [Position; 3]) -> bool {
    line.iter().all(|&pos| board.get(pos) == Square::Occupied(player))
}

#[test]
fn test_no_line_means_no_win() {
    for board in all_boards() {
        for player in [Player::X, Player::O] {
            let any_line = WINNING_LINES
                .iter()
                .any(|&line| owns_line(&board, player, line));
            assert_eq!(check_win(&board, player).is_some(), any_line, "{board}");
        }
    }
}

#[test]
fn test_reported_line_is_lowest_complete() {
    for board in all_boards() {
        for player in [Player::X, Player::O] {
            let expected = WINNING_LINES
                .iter()
                .position(|&line| owns_line(&board, player, line));
            assert_eq!(check_win(&board, player).map(WinningLine::index), expected);
        }
    }
}

#[test]
fn test_each_line_alone_reports_its_index() {
    for (index, line) in WINNING_LINES.iter().enumerate() {
        for player in [Player::X, Player::O] {
            let mut board = Board::new();
            for &pos in line {
                board.place_at(pos, player).unwrap();
            }
            assert_eq!(check_win(&board, player), WinningLine::new(index));
            assert_eq!(check_win(&board, player.opponent()), None);
        }
    }
}

#[test]
fn test_row_and_column_together_report_row() {
    // Top row (0) and left column (3).
    let board = Board::from_cells("XXXX__X__").unwrap();
    assert_eq!(check_win(&board, Player::X).map(WinningLine::index), Some(0));
}

#[test]
fn test_tie_iff_full_without_line() {
    for board in all_boards() {
        let expected = board.empty_cells().is_empty()
            && check_win(&board, Player::X).is_none()
            && check_win(&board, Player::O).is_none();
        assert_eq!(check_tie(&board), expected);
    }
}

#[test]
fn test_empty_cells_idempotent() {
    for board in all_boards().step_by(97) {
        assert_eq!(board.empty_cells(), board.empty_cells());
    }
}
