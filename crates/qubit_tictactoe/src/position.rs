//! Board positions, addressable by cell number 1-9.

use crate::moves::MoveError;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the board.
///
/// Positions map to cell numbers 1-9 in row-major order, the numbering
/// the move selector presents: `row = (n-1)/3`, `col = (n-1) % 3`.
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
    strum::EnumIter,
)]
pub enum Position {
    /// Cell 1.
    TopLeft,
    /// Cell 2.
    TopCenter,
    /// Cell 3.
    TopRight,
    /// Cell 4.
    MiddleLeft,
    /// Cell 5.
    Center,
    /// Cell 6.
    MiddleRight,
    /// Cell 7.
    BottomLeft,
    /// Cell 8.
    BottomCenter,
    /// Cell 9.
    BottomRight,
}

impl Position {
    /// All nine positions in cell-number order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Parses a cell number (1-9).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for anything outside 1-9. The
    /// move selector never produces such a number; hitting this error
    /// from the UI is an invariant violation.
    #[instrument]
    pub fn from_number(n: u8) -> Result<Self, MoveError> {
        match n {
            1..=9 => Ok(Self::ALL[usize::from(n) - 1]),
            _ => Err(MoveError::OutOfRange(n)),
        }
    }

    /// The cell number (1-9).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row of the cell (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of the cell (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Positions whose cells are still in superposition.
    #[instrument(skip(board))]
    pub fn open(board: &Board) -> Vec<Position> {
        Position::iter().filter(|pos| board.is_open(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}
