//! Core domain types for tic-tac-toe.

use crate::{BoardParseError, MoveError, Position};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (the human, moves first by default).
    X,
    /// Player O (the computer).
    O,
}

impl Player {
    /// The side controlled by the person at the keyboard.
    pub const HUMAN: Player = Player::X;
    /// The side controlled by the minimax search.
    pub const COMPUTER: Player = Player::O;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Parses a board from 9 cell characters in row-major order.
    ///
    /// `X`/`x` and `O`/`o` are marks; `_`, `.` and `-` are empty cells.
    /// Whitespace, `|` and `,` are ignored so `"XX_|OO_|___"` is accepted.
    pub fn from_cells(cells: &str) -> Result<Self, BoardParseError> {
        let mut board = Self::new();
        let mut cell = 0;
        for c in cells.chars() {
            if c.is_whitespace() || c == '|' || c == ',' {
                continue;
            }
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '_' | '.' | '-' => Square::Empty,
                found => return Err(BoardParseError::UnexpectedChar { found, cell }),
            };
            if cell < 9 {
                board.squares[cell] = square;
            }
            cell += 1;
        }
        if cell != 9 {
            return Err(BoardParseError::WrongLength(cell));
        }
        Ok(board)
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places `player` on an empty cell given by raw index.
    ///
    /// Fails without mutating the board if the index is outside 0-8 or the
    /// cell is already occupied.
    pub fn place(&mut self, cell: usize, player: Player) -> Result<Position, MoveError> {
        let pos = Position::from_index(cell).ok_or(MoveError::OutOfRange(cell))?;
        self.place_at(pos, player)?;
        Ok(pos)
    }

    /// Places `player` on an empty cell.
    pub fn place_at(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Returns a cell to empty. Only the search's undo step uses this.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Unchecked write, used to build corrupted boards in tests.
    #[cfg(test)]
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Empty cells in ascending index order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// True iff no empty cells remain.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of cells occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns all 9 cells to empty.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
