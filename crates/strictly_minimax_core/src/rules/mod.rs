//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the search and the game controller share one definition of
//! "won" and "drawn".

pub mod draw;
pub mod win;

pub use draw::check_tie;
pub use win::{WINNING_LINES, WinningLine, check_win};
