//! Exhaustive minimax search for the computer's move.
//!
//! The search explores every legal continuation with no pruning and no
//! randomness, so the chosen cell is fully reproducible for a given board.
//! Scores are always from the computer's point of view: a computer win is
//! worth `10 - depth`, a human win `-10 - depth`, a draw `0`. Subtracting
//! the depth makes faster wins and slower losses preferable.
//!
//! # Board contract
//!
//! Every entry point takes the board as `&mut Board` and works on it in
//! place: each candidate cell is filled, the subtree is searched, and the
//! cell is emptied again before the next candidate. On return the board is
//! identical to the one passed in.

use crate::rules::check_win;
use crate::{Board, Player, Position};
use tracing::{debug, instrument};

/// Base score of a decided game before the depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// A candidate cell paired with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct ScoredMove {
    /// Cell the mover would take.
    pub position: Position,
    /// Minimax value of taking it, from the computer's point of view.
    pub score: i32,
}

/// Result of a full search from one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    best: Option<ScoredMove>,
    score: i32,
    nodes: u64,
}

impl SearchReport {
    /// The chosen move, or `None` if the position was already decided.
    pub fn best(&self) -> Option<ScoredMove> {
        self.best
    }

    /// Minimax value of the root position.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Number of positions visited, root included.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Chooses the optimal cell for `player`.
///
/// Returns `None` only when the board is full or someone has already won.
pub fn best_move(board: &mut Board, player: Player) -> Option<Position> {
    search(board, player).best.map(|mv| mv.position)
}

/// Minimax value of the position with `player` to move.
pub fn score(board: &mut Board, player: Player) -> i32 {
    search(board, player).score
}

/// Runs the search and reports the chosen move, its value and the tree size.
#[instrument(skip(board), fields(empty = board.empty_cells().len()))]
pub fn search(board: &mut Board, player: Player) -> SearchReport {
    #[cfg(debug_assertions)]
    let snapshot = board.clone();

    let mut nodes = 0;
    let node = minimax(board, 0, player, &mut nodes);

    #[cfg(debug_assertions)]
    debug_assert_eq!(*board, snapshot, "search must restore the board");

    let report = SearchReport {
        best: node.position.map(|position| ScoredMove::new(position, node.score)),
        score: node.score,
        nodes,
    };
    debug!(
        best = ?report.best.map(|mv| mv.position.to_index()),
        score = report.score,
        nodes,
        "Search complete"
    );
    report
}

/// Scores every candidate for `player` at the root, in ascending cell order.
///
/// Useful for explaining a move: the search picks the first entry with the
/// maximal (computer) or minimal (human) score.
pub fn score_moves(board: &mut Board, player: Player) -> Vec<ScoredMove> {
    let mut nodes = 0;
    board
        .empty_cells()
        .into_iter()
        .map(|pos| ScoredMove::new(pos, try_cell(board, pos, 0, player, &mut nodes)))
        .collect()
}

struct Node {
    score: i32,
    position: Option<Position>,
}

fn minimax(board: &mut Board, depth: i32, player: Player, nodes: &mut u64) -> Node {
    *nodes += 1;

    let terminal = if check_win(board, Player::HUMAN).is_some() {
        Some(-WIN_SCORE - depth)
    } else if check_win(board, Player::COMPUTER).is_some() {
        Some(WIN_SCORE - depth)
    } else if board.is_full() {
        Some(0)
    } else {
        None
    };
    if let Some(score) = terminal {
        return Node {
            score,
            position: None,
        };
    }

    let maximizing = player == Player::COMPUTER;
    let mut best: Option<ScoredMove> = None;
    for pos in board.empty_cells() {
        let score = try_cell(board, pos, depth, player, nodes);
        let improves = match best {
            None => true,
            Some(current) if maximizing => score > current.score,
            Some(current) => score < current.score,
        };
        if improves {
            best = Some(ScoredMove::new(pos, score));
        }
    }

    match best {
        Some(mv) => Node {
            score: mv.score,
            position: Some(mv.position),
        },
        None => Node {
            score: 0,
            position: None,
        },
    }
}

/// Fills `pos` for `player`, scores the subtree, then empties `pos` again.
fn try_cell(board: &mut Board, pos: Position, depth: i32, player: Player, nodes: &mut u64) -> i32 {
    // Callers only pass empty cells, from `empty_cells()`.
    if board.place_at(pos, player).is_err() {
        return 0;
    }
    let score = minimax(board, depth + 1, player.opponent(), nodes).score;
    board.clear(pos);
    score
}
