//! Pure tic-tac-toe logic with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Board state**: [`Board`], a 9-cell grid of [`Square`]s
//! - **Outcome evaluator**: [`check_win`], [`check_tie`] and [`Outcome`]
//! - **Move search**: [`search::best_move`], depth-biased full-tree minimax
//! - **Game controller**: [`Game`], which turns a human cell index into a
//!   [`TurnReport`] carrying the verdict and the computer's reply
//!
//! # Example
//!
//! ```
//! use strictly_minimax_core::{Game, Outcome, Position};
//!
//! let mut game = Game::new();
//! let report = game.submit_human_move(4)?;
//! assert_eq!(report.human, Outcome::Continue);
//!
//! let reply = report.computer.expect("game continues");
//! assert!(Position::CORNERS.contains(&reply.position));
//! # Ok::<(), strictly_minimax_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod outcome;
mod position;
mod types;

pub mod invariants;
pub mod rules;
pub mod search;

pub use action::Move;
pub use error::{BoardParseError, MoveError};
pub use game::{ComputerMove, FirstPlayer, Game, TurnReport};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{WINNING_LINES, WinningLine, check_tie, check_win};
pub use search::{ScoredMove, SearchReport};
pub use types::{Board, Player, Square};
