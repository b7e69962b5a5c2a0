//! Verdict reported after every placed move.

use crate::rules::{WinningLine, check_tie, check_win};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board after a move.
///
/// Serializes as `{"status": "continue" | "win" | "tie", "player"?, "winningLine"?}`,
/// the shape a presentation layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// Nobody has won and empty cells remain.
    #[display("Continue")]
    Continue,
    /// `player` completed `line`.
    #[display("{}'s win", player)]
    Win {
        /// The winning player.
        player: Player,
        /// Lowest-indexed complete line.
        #[serde(rename = "winningLine")]
        line: WinningLine,
    },
    /// Board full, no line for either player.
    #[display("Draw")]
    Tie,
}

impl Outcome {
    /// Evaluates the board right after `mover` placed a mark.
    ///
    /// Only `mover` can have just completed a line, so only their lines are
    /// checked before falling back to the tie test.
    pub fn evaluate(board: &Board, mover: Player) -> Self {
        if let Some(line) = check_win(board, mover) {
            Outcome::Win {
                player: mover,
                line,
            }
        } else if check_tie(board) {
            Outcome::Tie
        } else {
            Outcome::Continue
        }
    }

    /// Evaluates an arbitrary board, checking X before O.
    pub fn of_board(board: &Board) -> Self {
        for player in [Player::X, Player::O] {
            if let Some(line) = check_win(board, player) {
                return Outcome::Win { player, line };
            }
        }
        if board.is_full() {
            Outcome::Tie
        } else {
            Outcome::Continue
        }
    }

    /// True for `Win` and `Tie`.
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    /// The winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(player),
            _ => None,
        }
    }
}
