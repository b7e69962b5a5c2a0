//! Strictly Minimax - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_minimax::{Cli, Command, GameConfig, Mark, Session};
use strictly_minimax_core::{Board, Game, Player, search};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = GameConfig::load_or_default(&cli.config)?;
    if cli.json {
        config = config.with_json(true);
    }

    init_tracing(config.log_filter());
    info!(config = %cli.config.display(), "Starting strictly_minimax");

    match cli.command {
        Command::Play { first_player } => {
            if let Some(opener) = first_player {
                config = config.with_first_player(opener.into());
            }
            run_play(&config)
        }
        Command::BestMove { board, player } => run_best_move(&board, player, *config.json()),
    }
}

/// Logs go to stderr so stdout carries only the game.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive game
#[instrument(skip(config), fields(first_player = ?config.first_player()))]
fn run_play(config: &GameConfig) -> Result<()> {
    let game = Game::with_first_player(*config.first_player());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(game, stdin.lock(), stdout.lock(), *config.json());
    session.run()
}

/// Print the search's choice for one position
#[instrument]
fn run_best_move(cells: &str, mark: Mark, json: bool) -> Result<()> {
    let mut board = Board::from_cells(cells).context("Invalid --board")?;
    let player = Player::from(mark);
    let report = search::search(&mut board, player);

    if json {
        let value = serde_json::json!({
            "cellIndex": report.best().map(|mv| mv.position),
            "score": report.score(),
            "nodes": report.nodes(),
        });
        println!("{}", value);
    } else {
        println!("{}\n", board);
        match report.best() {
            Some(mv) => println!(
                "{} plays {} ({}), score {}, {} positions searched",
                player,
                mv.position.to_index(),
                mv.position,
                mv.score,
                report.nodes()
            ),
            None => println!("No move: the game is already decided (score {})", report.score()),
        }
    }
    Ok(())
}
