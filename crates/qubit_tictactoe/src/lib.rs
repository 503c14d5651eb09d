//! Quantum tic-tac-toe rules engine.
//!
//! Cells start in superposition (`|ψ⟩`) and collapse to a measured ket
//! when picked: the player wins with a line of `|1⟩`, the computer with
//! a line of `|0⟩`. Which ket a cell collapses to comes from a
//! [`RandomnessSource`] - a binary quantum measurement behind a trait,
//! so tests can script outcomes while production wiring measures a real
//! simulated qubit.
//!
//! # Example
//!
//! ```
//! use qubit_tictactoe::{GameState, Position, ScriptedSource, Symbol, play_turn};
//! use rand::SeedableRng;
//!
//! let mut state = GameState::new();
//! let mut source = ScriptedSource::new([Symbol::One, Symbol::Zero]);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//!
//! let exchange = play_turn(&mut state, Position::Center, &mut source, &mut rng)?;
//! assert!(!exchange.outcome.is_terminal());
//! # Ok::<(), qubit_tictactoe::TurnError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod moves;
mod position;
mod types;

pub mod invariants;
pub mod rules;

mod source;
mod turn;

pub use game::GameState;
pub use moves::{Move, MoveError, Seat};
pub use position::Position;
pub use source::{RandomnessSource, ScriptedSource, SourceError};
pub use turn::{Exchange, TurnError, play_turn};
pub use types::{Board, Cell, Outcome, Symbol};
