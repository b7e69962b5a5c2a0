//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_minimax_core::{FirstPlayer, Player};

/// Strictly Minimax - tic-tac-toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (used only if it exists)
    #[arg(long, global = true, default_value = "strictly_minimax.toml")]
    pub config: PathBuf,

    /// Print verdicts as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Who opens each game (overrides the settings file)
        #[arg(long, value_enum)]
        first_player: Option<Opener>,
    },

    /// Print the search's choice for a given position
    BestMove {
        /// Nine cells in row-major order, e.g. "XX_OO____"
        #[arg(long)]
        board: String,

        /// Side to move
        #[arg(long, value_enum, default_value_t = Mark::O)]
        player: Mark,
    },
}

/// Command-line spelling of [`FirstPlayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opener {
    /// The human (X) opens
    Human,
    /// The computer (O) opens
    Computer,
}

impl From<Opener> for FirstPlayer {
    fn from(opener: Opener) -> Self {
        match opener {
            Opener::Human => FirstPlayer::Human,
            Opener::Computer => FirstPlayer::Computer,
        }
    }
}

/// Command-line spelling of [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mark {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::X,
            Mark::O => Player::O,
        }
    }
}
