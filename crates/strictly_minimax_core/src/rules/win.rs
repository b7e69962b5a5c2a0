//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// The 8 winning lines in canonical order: rows, columns, diagonals.
///
/// The index into this table is the line index reported by [`check_win`].
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Index (0-7) of a line in [`WINNING_LINES`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct WinningLine(u8);

impl WinningLine {
    /// Returns the line at `index`, or `None` outside 0-7.
    pub fn new(index: usize) -> Option<Self> {
        (index < WINNING_LINES.len()).then_some(Self(index as u8))
    }

    /// Canonical index of this line.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The three cells forming this line.
    pub fn cells(self) -> [Position; 3] {
        WINNING_LINES[self.index()]
    }
}

/// Returns the first line, in canonical order, fully owned by `player`.
///
/// When several lines are complete at once the lowest index wins.
pub fn check_win(board: &Board, player: Player) -> Option<WinningLine> {
    let mark = Square::Occupied(player);
    WINNING_LINES
        .iter()
        .position(|line| line.iter().all(|&pos| board.get(pos) == mark))
        .map(|index| WinningLine(index as u8))
}
