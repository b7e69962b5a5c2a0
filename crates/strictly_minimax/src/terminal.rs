//! Line-oriented terminal front end.
//!
//! Reads one command per line, forwards cell selections to the core
//! [`Game`], and prints the board and verdicts. Rejected moves are reported
//! and otherwise ignored.

use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_minimax_core::{ComputerMove, Game, MoveError, Outcome, Player, Position, TurnReport};
use tracing::{debug, info, instrument, warn};

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A cell index as typed; out-of-range values are left for the core to reject.
    Cell(usize),
    /// Start over.
    Restart,
    /// Leave the session.
    Quit,
    /// Show the command list.
    Help,
    /// Blank line.
    Nothing,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses a line of user input.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Input::Nothing,
            "q" | "quit" | "exit" => Input::Quit,
            "r" | "restart" | "new" => Input::Restart,
            "h" | "help" | "?" => Input::Help,
            _ => {
                if let Ok(cell) = trimmed.parse::<usize>() {
                    Input::Cell(cell)
                } else if let Some(pos) = Position::from_label_or_number(trimmed) {
                    Input::Cell(pos.to_index())
                } else {
                    Input::Unknown(trimmed.to_string())
                }
            }
        }
    }
}

/// Winning-message text shown when a game ends.
pub fn verdict_message(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::Continue => None,
        Outcome::Win { player, .. } => Some(format!("{}'s Win!", player)),
        Outcome::Tie => Some("Draw!".to_string()),
    }
}

const HELP: &str = "Enter a cell 0-8 or a name like \"center\"; r restarts, q quits.";

/// An interactive game bound to an input and an output stream.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around an existing game.
    pub fn new(game: Game, input: R, output: W, json: bool) -> Self {
        Self {
            game,
            input,
            output,
            json,
        }
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self), fields(json = self.json))]
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        self.announce_new_game(None)?;

        let mut line = String::new();
        loop {
            if !self.json {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match Input::parse(&line) {
                Input::Cell(cell) => self.human_move(cell)?,
                Input::Restart => {
                    let opening = self.game.start_new_game();
                    self.announce_new_game(opening)?;
                }
                Input::Quit => break,
                Input::Help => self.say(HELP)?,
                Input::Nothing => {}
                Input::Unknown(text) => {
                    warn!(input = %text, "Unrecognized input");
                    self.reject(&format!("Unrecognized input {:?}", text))?;
                }
            }
        }

        info!("Session ended");
        Ok(())
    }

    /// Consumes the session, returning the game and output stream.
    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.output)
    }

    fn human_move(&mut self, cell: usize) -> Result<()> {
        match self.game.submit_human_move(cell) {
            Ok(report) => self.show_turn(&report),
            Err(e) => self.show_rejection(&e),
        }
    }

    fn announce_new_game(&mut self, opening: Option<ComputerMove>) -> Result<()> {
        if self.json {
            let event = serde_json::json!({
                "event": "newGame",
                "firstPlayer": self.game.first_player(),
                "computer": opening,
            });
            writeln!(self.output, "{}", event)?;
            return Ok(());
        }

        writeln!(
            self.output,
            "New game. {} moves first. You are {}.",
            self.game.first_player().label(),
            Player::HUMAN
        )?;
        if let Some(mv) = opening {
            writeln!(self.output, "Computer plays {} ({}).", mv.position.to_index(), mv.position)?;
        }
        self.show_board()?;
        self.say(HELP)
    }

    fn show_turn(&mut self, report: &TurnReport) -> Result<()> {
        if self.json {
            writeln!(self.output, "{}", serde_json::to_string(report)?)?;
            return Ok(());
        }

        if let Some(mv) = report.computer {
            writeln!(self.output, "Computer plays {} ({}).", mv.position.to_index(), mv.position)?;
        }
        self.show_board()?;
        if let Some(message) = verdict_message(report.verdict()) {
            writeln!(self.output, "{}", message)?;
            self.say("Type r to play again or q to quit.")?;
        }
        Ok(())
    }

    fn show_rejection(&mut self, error: &MoveError) -> Result<()> {
        debug!(error = %error, "Move ignored");
        self.reject(&error.to_string())
    }

    fn reject(&mut self, message: &str) -> Result<()> {
        if self.json {
            writeln!(self.output, "{}", serde_json::json!({ "error": message }))?;
            Ok(())
        } else {
            self.say(message)
        }
    }

    fn show_board(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.game.board())?;
        Ok(())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}
