//! Strictly Minimax - terminal tic-tac-toe against a minimax opponent.
//!
//! # Architecture
//!
//! - **Core**: game rules and search live in `strictly_minimax_core`
//! - **Terminal**: a line-oriented [`Session`] that reports human moves to
//!   the core and prints its verdicts
//! - **Config**: [`GameConfig`] settings file plus [`Cli`] overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod terminal;

pub use cli::{Cli, Command, Mark, Opener};
pub use config::{ConfigError, GameConfig};
pub use terminal::{Input, Session, verdict_message};
