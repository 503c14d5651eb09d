//! First-class move types.
//!
//! A move records who picked the cell and which ket the measurement
//! produced, so a finished game can be replayed from its histories.

use crate::position::Position;
use crate::types::Symbol;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The seat that selected a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The human player, who submits a cell number each exchange.
    Player,
    /// The computer, which takes a random open cell in reply.
    Opponent,
}

/// A move: a seat collapsing the cell at a position to a measured symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who picked the cell.
    pub seat: Seat,
    /// The chosen cell.
    pub position: Position,
    /// The ket the measurement produced for this cell.
    pub symbol: Symbol,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(seat: Seat, position: Position, symbol: Symbol) -> Self {
        Self {
            seat,
            position,
            symbol,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> cell {} = {}", self.seat, self.position, self.symbol)
    }
}

/// Error raised when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position has already collapsed.
    #[display("cell {} has already collapsed", _0)]
    Occupied(Position),

    /// The cell number is outside 1-9.
    #[display("cell number {} is out of range (expected 1-9)", _0)]
    OutOfRange(u8),

    /// The game has reached a terminal outcome.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
