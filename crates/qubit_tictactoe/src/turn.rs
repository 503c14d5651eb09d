//! Turn orchestration.
//!
//! One submitted cell number drives one exchange: the player's cell
//! collapses first, and only if the game is still in progress does the
//! computer take a uniformly random open cell. Both cells receive
//! whatever ket the measurement yields.

use crate::game::GameState;
use crate::moves::{Move, MoveError, Seat};
use crate::position::Position;
use crate::source::{RandomnessSource, SourceError};
use crate::types::Outcome;
use rand::Rng;
use tracing::{debug, instrument};

/// Result of one complete exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    /// The player's move.
    pub player: Move,
    /// The computer's reply, absent when the player's move ended the game.
    pub opponent: Option<Move>,
    /// Outcome after the exchange.
    pub outcome: Outcome,
}

/// Error raised while playing a turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum TurnError {
    /// The move was rejected by the rules engine.
    #[display("{}", _0)]
    Move(MoveError),
    /// The measurement backend failed.
    #[display("{}", _0)]
    Source(SourceError),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Move(err) => Some(err),
            TurnError::Source(err) => Some(err),
        }
    }
}

/// Plays one exchange starting from the player's chosen cell.
///
/// The cell is validated before a measurement is consumed, so a
/// rejected move costs nothing.
///
/// # Errors
///
/// - [`TurnError::Move`] if the game is over or the cell has collapsed;
///   the state is untouched.
/// - [`TurnError::Source`] if the backend fails. When the failure hits
///   the computer's measurement the player's move stands; the exchange
///   as a whole is reported as failed and is not retried.
#[instrument(skip(state, source, rng), fields(position = %position))]
pub fn play_turn<S, R>(
    state: &mut GameState,
    position: Position,
    source: &mut S,
    rng: &mut R,
) -> Result<Exchange, TurnError>
where
    S: RandomnessSource,
    R: Rng,
{
    if state.is_over() {
        return Err(MoveError::GameOver.into());
    }
    if !state.board().is_open(position) {
        return Err(MoveError::Occupied(position).into());
    }

    let player = Move::new(Seat::Player, position, source.next_symbol()?);
    let outcome = state.apply_move(player)?;
    debug!(%player, ?outcome, "player move applied");
    if outcome.is_terminal() {
        return Ok(Exchange {
            player,
            opponent: None,
            outcome,
        });
    }

    // At least one open cell remains here, otherwise the board would
    // have evaluated to a draw above.
    let open: Vec<Position> = state.open_positions().iter().copied().collect();
    let reply = open[rng.random_range(0..open.len())];
    let opponent = Move::new(Seat::Opponent, reply, source.next_symbol()?);
    let outcome = state.apply_move(opponent)?;
    debug!(%opponent, ?outcome, "computer move applied");

    Ok(Exchange {
        player,
        opponent: Some(opponent),
        outcome,
    })
}
