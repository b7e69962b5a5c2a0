//! End-to-end tests for the game controller and the minimax opponent.

use strictly_minimax_core::search::{self, WIN_SCORE};
use strictly_minimax_core::{
    Board, FirstPlayer, Game, MoveError, Outcome, Player, Position, WinningLine, check_tie,
};

#[test]
fn test_center_opening_gets_corner_reply() {
    let mut game = Game::new();
    let report = game.submit_human_move(4).unwrap();

    assert_eq!(report.human, Outcome::Continue);
    let reply = report.computer.expect("computer should answer");
    assert!(Position::CORNERS.contains(&reply.position), "{:?}", reply.position);
    assert_eq!(reply.verdict, Outcome::Continue);
}

#[test]
fn test_human_completes_top_row() {
    // X X _ / O O _ / _ _ _, human to play 2.
    let mut board = Board::from_cells("XX_OO____").unwrap();
    board.place(2, Player::X).unwrap();
    assert_eq!(
        Outcome::evaluate(&board, Player::X),
        Outcome::Win {
            player: Player::X,
            line: WinningLine::new(0).unwrap(),
        }
    );
}

#[test]
fn test_full_board_without_line_is_tie() {
    let board = Board::from_cells("XOXXOOOXX").unwrap();
    assert!(check_tie(&board));
    assert_eq!(Outcome::evaluate(&board, Player::X), Outcome::Tie);
    assert_eq!(Outcome::of_board(&board), Outcome::Tie);
}

#[test]
fn test_computer_takes_win_over_block() {
    // O O _ / X X _ / _ _ _, computer to move.
    let mut board = Board::from_cells("OO_XX____").unwrap();
    assert_eq!(
        search::best_move(&mut board, Player::O),
        Some(Position::TopRight)
    );
    assert_eq!(board, Board::from_cells("OO_XX____").unwrap());
}

#[test]
fn test_tie_break_keeps_first_best_cell() {
    // On an empty board every cell draws; cell 0 is reached first.
    let mut board = Board::new();
    let moves = search::score_moves(&mut board, Player::O);
    assert!(moves.iter().all(|mv| mv.score == 0));
    assert_eq!(search::best_move(&mut board, Player::O), Some(Position::TopLeft));
}

#[test]
fn test_best_move_has_maximal_score() {
    let mut board = Board::from_cells("X_______X").unwrap();
    let moves = search::score_moves(&mut board, Player::O);
    let max = moves.iter().map(|mv| mv.score).max().unwrap();
    let first_max = moves.iter().find(|mv| mv.score == max).unwrap();

    let report = search::search(&mut board, Player::O);
    assert_eq!(report.best(), Some(*first_max));
    assert_eq!(report.score(), max);
}

#[test]
fn test_edge_reply_to_center_loses() {
    let mut board = Board::from_cells("____X____").unwrap();
    let moves = search::score_moves(&mut board, Player::O);
    for mv in moves {
        if Position::CORNERS.contains(&mv.position) {
            assert_eq!(mv.score, 0, "{:?}", mv.position);
        } else {
            assert!(mv.score < 0, "{:?}", mv.position);
        }
    }
}

#[test]
fn test_invalid_move_is_ignored() {
    let mut game = Game::new();
    let before = game.board().clone();
    let err = game.submit_human_move(9).unwrap_err();
    assert!(err.is_invalid_move());
    assert_eq!(game.board(), &before);
    assert_eq!(game.outcome(), Outcome::Continue);
}

/// Plays every possible human strategy against the computer.
///
/// Returns the number of finished games; panics if the human ever wins.
fn explore(game: &Game) -> usize {
    if game.outcome().is_over() {
        assert_ne!(
            game.outcome().winner(),
            Some(Player::HUMAN),
            "computer lost:\n{}",
            game.board()
        );
        return 1;
    }
    game.board()
        .empty_cells()
        .into_iter()
        .map(|pos| {
            let mut next = game.clone();
            next.submit_human_move(pos.to_index()).unwrap();
            explore(&next)
        })
        .sum()
}

#[test]
fn test_computer_never_loses_moving_second() {
    let games = explore(&Game::new());
    assert!(games > 0);
}

#[test]
fn test_computer_never_loses_moving_first() {
    let games = explore(&Game::with_first_player(FirstPlayer::Computer));
    assert!(games > 0);
}

#[test]
fn test_computer_wins_when_human_blunders() {
    let mut game = Game::new();
    // Edge opening: the adjacent corner draws and is scanned first.
    let first = game.submit_human_move(1).unwrap();
    assert_eq!(first.computer.map(|mv| mv.position), Some(Position::TopLeft));

    // X at 2 leaves O a forced fork.
    let report = game.submit_human_move(2).unwrap();
    assert_eq!(report.verdict(), Outcome::Continue);
    let mut board = game.board().clone();
    let value = search::score(&mut board, Player::X);
    assert!(value > 0 && value < WIN_SCORE, "{value}");
}

#[test]
fn test_game_over_rejects_moves() {
    let mut game = Game::new();
    while !game.outcome().is_over() {
        let cell = game.board().empty_cells()[0].to_index();
        game.submit_human_move(cell).unwrap();
    }
    assert_eq!(game.submit_human_move(8), Err(MoveError::GameOver));
}
