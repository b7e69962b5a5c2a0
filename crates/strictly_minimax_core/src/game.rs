//! Human-versus-computer game controller.
//!
//! [`Game`] owns the single board for a session. A presentation layer
//! reports each human move as a cell index; the controller applies it,
//! evaluates the board, and if play continues answers with the computer's
//! move chosen by [`search::best_move`](crate::search::best_move).

use crate::invariants::{InvariantSet, TicTacToeInvariants};
use crate::search;
use crate::{Board, Move, MoveError, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Which side takes the first move of a new game.
///
/// Defaults to [`FirstPlayer::Human`] so the person at the keyboard moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human (X) opens.
    #[default]
    Human,
    /// The computer (O) opens.
    Computer,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Player",
            Self::Computer => "Computer",
        }
    }

    /// The mark that moves first.
    pub fn player(self) -> Player {
        match self {
            Self::Human => Player::HUMAN,
            Self::Computer => Player::COMPUTER,
        }
    }
}

/// The computer's reply and the verdict after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct ComputerMove {
    /// Cell chosen by the search.
    #[serde(rename = "cellIndex")]
    pub position: Position,
    /// Verdict after placing it.
    pub verdict: Outcome,
}

/// Everything that happened in response to one human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct TurnReport {
    /// Verdict right after the human's mark.
    pub human: Outcome,
    /// The computer's reply, present only if the human's move left the game open.
    pub computer: Option<ComputerMove>,
}

impl TurnReport {
    /// Verdict after the last mark placed this turn.
    pub fn verdict(&self) -> Outcome {
        self.computer.map_or(self.human, |mv| mv.verdict)
    }
}

/// Tic-tac-toe game engine with a minimax opponent.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    outcome: Outcome,
    first_player: FirstPlayer,
}

impl Game {
    /// Creates a new game with the human moving first.
    #[instrument]
    pub fn new() -> Self {
        let mut game = Self::blank(FirstPlayer::Human);
        game.start_new_game();
        game
    }

    /// Creates a new game; if the computer opens, its first move is already on the board.
    #[instrument]
    pub fn with_first_player(first_player: FirstPlayer) -> Self {
        let mut game = Self::blank(first_player);
        game.start_new_game();
        game
    }

    fn blank(first_player: FirstPlayer) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            outcome: Outcome::Continue,
            first_player,
        }
    }

    /// Clears the board and verdict.
    ///
    /// Returns the computer's opening move when [`FirstPlayer::Computer`] is set.
    #[instrument(skip(self), fields(first_player = ?self.first_player))]
    pub fn start_new_game(&mut self) -> Option<ComputerMove> {
        self.board.reset();
        self.history.clear();
        self.outcome = Outcome::Continue;
        info!("New game started");

        match self.first_player {
            FirstPlayer::Human => None,
            FirstPlayer::Computer => match self.play_computer() {
                Ok(reply) => reply,
                Err(e) => {
                    warn!(error = %e, "Computer opening rejected");
                    None
                }
            },
        }
    }

    /// Applies a human move and, if the game goes on, the computer's reply.
    ///
    /// # Errors
    ///
    /// Rejects moves after the game ended, cells outside 0-8 and occupied
    /// cells. Nothing changes when a move is rejected, so the caller can
    /// treat the error as ignored input.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, cell: usize) -> Result<TurnReport, MoveError> {
        if self.outcome.is_over() {
            warn!(outcome = %self.outcome, "Move submitted after game over");
            return Err(MoveError::GameOver);
        }

        let position = self
            .board
            .place(cell, Player::HUMAN)
            .inspect_err(|e| warn!(error = %e, "Human move rejected"))?;
        let human = self.record(Move::new(Player::HUMAN, position))?;
        debug!(position = cell, verdict = %human, "Human moved");

        let computer = if human.is_over() {
            None
        } else {
            self.play_computer()?
        };

        Ok(TurnReport::new(human, computer))
    }

    /// Lets the search place the computer's mark.
    fn play_computer(&mut self) -> Result<Option<ComputerMove>, MoveError> {
        let Some(position) = search::best_move(&mut self.board, Player::COMPUTER) else {
            debug!("Search found no move");
            return Ok(None);
        };
        self.board.place_at(position, Player::COMPUTER)?;
        let verdict = self.record(Move::new(Player::COMPUTER, position))?;
        debug!(position = position.to_index(), verdict = %verdict, "Computer moved");
        Ok(Some(ComputerMove::new(position, verdict)))
    }

    /// Logs a placed move, checks invariants and recomputes the verdict.
    fn record(&mut self, mov: Move) -> Result<Outcome, MoveError> {
        self.history.push(mov);

        if cfg!(debug_assertions) {
            TicTacToeInvariants::check_all(&*self).map_err(|violations| {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                warn!(%descriptions, "Postcondition failed");
                MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
            })?;
        }

        self.outcome = Outcome::evaluate(&self.board, mov.player);
        if self.outcome.is_over() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game over");
        }
        Ok(self.outcome)
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far in this game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Current verdict.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Who opens each new game.
    pub fn first_player(&self) -> FirstPlayer {
        self.first_player
    }

    /// Changes who opens; takes effect at the next [`Game::start_new_game`].
    pub fn set_first_player(&mut self, first_player: FirstPlayer) {
        self.first_player = first_player;
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.history
            .last()
            .map_or(self.first_player.player(), |mov| mov.player.opponent())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WinningLine;

    #[test]
    fn test_human_move_gets_reply() {
        let mut game = Game::new();
        let report = game.submit_human_move(4).unwrap();
        assert_eq!(report.human, Outcome::Continue);
        let reply = report.computer.unwrap();
        assert_eq!(reply.verdict, Outcome::Continue);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.to_move(), Player::HUMAN);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::new();
        game.submit_human_move(4).unwrap();
        let board = game.board().clone();

        assert_eq!(
            game.submit_human_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.submit_human_move(12), Err(MoveError::OutOfRange(12)));
        assert_eq!(game.board(), &board);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_computer_opens_when_configured() {
        let game = Game::with_first_player(FirstPlayer::Computer);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].player, Player::COMPUTER);
        assert_eq!(game.to_move(), Player::HUMAN);
    }

    #[test]
    fn test_restart_clears_verdict() {
        let mut game = Game::new();
        // Human loses quickly by ignoring threats.
        while !game.outcome().is_over() {
            let cell = game.board().empty_cells()[0].to_index();
            game.submit_human_move(cell).unwrap();
        }
        assert_eq!(game.submit_human_move(0), Err(MoveError::GameOver));

        assert_eq!(game.start_new_game(), None);
        assert_eq!(game.outcome(), Outcome::Continue);
        assert!(game.history().is_empty());
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_turn_report_json_shape() {
        let report = TurnReport::new(
            Outcome::Continue,
            Some(ComputerMove::new(
                Position::TopRight,
                Outcome::Win {
                    player: Player::O,
                    line: WinningLine::new(0).unwrap(),
                },
            )),
        );
        assert_eq!(
            serde_json::to_value(report).unwrap(),
            serde_json::json!({
                "human": {"status": "continue"},
                "computer": {
                    "cellIndex": 2,
                    "verdict": {"status": "win", "player": "O", "winningLine": 0}
                }
            })
        );
        assert_eq!(report.verdict().winner(), Some(Player::O));
    }
}
