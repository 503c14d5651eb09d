//! Game state and move application.

use crate::invariants;
use crate::moves::{Move, MoveError, Seat};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Outcome};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// Complete state of one game session.
///
/// Owned explicitly and passed into the orchestrator; there is no
/// ambient session storage. Lives in memory only and is dropped on
/// restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Positions still in superposition.
    open: BTreeSet<Position>,
    /// Outcome of the last evaluation; terminal outcomes are absorbing.
    outcome: Outcome,
    /// Cells the player picked, in order.
    player_history: Vec<Position>,
    /// Cells the computer picked, in order.
    opponent_history: Vec<Position>,
}

impl GameState {
    /// Creates a fresh session with every cell open.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            open: Position::ALL.into_iter().collect(),
            outcome: Outcome::InProgress,
            player_history: Vec::new(),
            opponent_history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the outcome of the last evaluation.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True once a terminal outcome has been reached.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Positions still available to either seat.
    pub fn open_positions(&self) -> &BTreeSet<Position> {
        &self.open
    }

    /// Cells the player picked, in order.
    pub fn player_history(&self) -> &[Position] {
        &self.player_history
    }

    /// Cells the computer picked, in order.
    pub fn opponent_history(&self) -> &[Position] {
        &self.opponent_history
    }

    /// Applies a move and returns the freshly evaluated outcome.
    ///
    /// Exactly one cell changes on success; the outcome is recomputed
    /// from the board after the write.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once a terminal outcome was reached.
    /// - [`MoveError::Occupied`] if the cell already collapsed; the
    ///   board is left untouched.
    #[instrument(skip(self), fields(position = %mov.position, symbol = %mov.symbol))]
    pub fn apply_move(&mut self, mov: Move) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        self.board.collapse(mov.position, mov.symbol)?;
        self.open.remove(&mov.position);
        match mov.seat {
            Seat::Player => self.player_history.push(mov.position),
            Seat::Opponent => self.opponent_history.push(mov.position),
        }
        self.outcome = rules::evaluate(&self.board);
        debug_assert!(invariants::histories_consistent(self));
        Ok(self.outcome)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
