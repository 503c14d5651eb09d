//! Core domain types for quantum tic-tac-toe.

use crate::moves::MoveError;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A collapsed measurement value.
///
/// Every occupied cell holds one of the two computational basis kets.
/// The human player claims lines of `|1⟩`, the computer lines of `|0⟩` -
/// but which ket a cell collapses to is decided by the measurement, not
/// by who picked the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// The `|1⟩` ket (the human player's winning symbol).
    One,
    /// The `|0⟩` ket (the computer's winning symbol).
    Zero,
}

impl Symbol {
    /// Returns the other basis ket.
    pub fn other(self) -> Self {
        match self {
            Symbol::One => Symbol::Zero,
            Symbol::Zero => Symbol::One,
        }
    }

    /// Ket notation for display.
    pub fn ket(self) -> &'static str {
        match self {
            Symbol::One => "|1⟩",
            Symbol::Zero => "|0⟩",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ket())
    }
}

/// A cell on the board: still in superposition, or collapsed to a ket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unmeasured cell, displayed as `|ψ⟩`.
    Superposed,
    /// Cell that has collapsed to a basis ket.
    Collapsed(Symbol),
}

impl Cell {
    /// True while the cell has not been measured.
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Superposed)
    }

    /// The symbol this cell collapsed to, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Superposed => None,
            Cell::Collapsed(symbol) => Some(symbol),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Superposed => write!(f, "|ψ⟩"),
            Cell::Collapsed(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// 3x3 quantum tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates a board with every cell in superposition.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Superposed; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Collapses the cell at the given position to a symbol.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the cell has already collapsed.
    /// Collapsed cells never revert or change value.
    pub fn collapse(&mut self, pos: Position, symbol: Symbol) -> Result<(), MoveError> {
        if !self.is_open(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.cells[pos.index()] = Cell::Collapsed(symbol);
        Ok(())
    }

    /// Checks if the cell at the position is still in superposition.
    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos).is_open()
    }

    /// Checks if every cell has collapsed.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_open())
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                result.push_str(&self.cells[row * 3 + col].to_string());
                if col < 2 {
                    result.push_str(" | ");
                }
            }
            if row < 2 {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal (or not) result of a board evaluation.
///
/// Derived from the board by [`crate::rules::evaluate`] after every
/// mutation, never stored apart from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Open cells remain and no line is complete.
    InProgress,
    /// A line of `|1⟩` cells exists.
    PlayerWin,
    /// A line of `|0⟩` cells exists.
    OpponentWin,
    /// Every cell collapsed with no complete line.
    Draw,
}

impl Outcome {
    /// True for the three absorbing states; no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Outcome::InProgress => "Game in progress",
            Outcome::PlayerWin => "You win!",
            Outcome::OpponentWin => "Computer wins!",
            Outcome::Draw => "It is a draw!",
        };
        write!(f, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_all_superposed() {
        let board = Board::new();
        assert!(board.cells().iter().all(|cell| cell.is_open()));
        assert!(!board.is_full());
    }

    #[test]
    fn collapse_is_monotonic() {
        let mut board = Board::new();
        let pos = Position::Center;
        board.collapse(pos, Symbol::One).unwrap();
        assert_eq!(board.get(pos), Cell::Collapsed(Symbol::One));

        // A second collapse is rejected and the cell keeps its value.
        let err = board.collapse(pos, Symbol::Zero).unwrap_err();
        assert_eq!(err, MoveError::Occupied(pos));
        assert_eq!(board.get(pos), Cell::Collapsed(Symbol::One));
    }

    #[test]
    fn symbols_are_complementary() {
        assert_eq!(Symbol::One.other(), Symbol::Zero);
        assert_eq!(Symbol::Zero.other(), Symbol::One);
        assert_eq!(Symbol::One.to_string(), "|1⟩");
    }

    #[test]
    fn board_display_shows_kets() {
        let mut board = Board::new();
        board.collapse(Position::TopLeft, Symbol::One).unwrap();
        let shown = board.display();
        assert!(shown.starts_with("|1⟩"));
        assert!(shown.contains("|ψ⟩"));
    }
}
