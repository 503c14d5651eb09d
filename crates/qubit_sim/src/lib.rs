//! Dense statevector simulator backing the quantum tic-tac-toe demos.
//!
//! Provides the gate set and circuits of the educational pages, the
//! shot-sampling [`Simulator`], the [`HadamardSource`] that feeds
//! measured symbols to the game, and the [`Bb84`] key-distribution
//! simulation.
//!
//! # Example
//!
//! ```
//! use qubit_sim::{Simulator, presets};
//!
//! let mut sim = Simulator::seeded(1);
//! let counts = sim.run(&presets::bell_pair(), 1000)?;
//! // Entangled qubits only ever agree.
//! assert_eq!(counts.count("00") + counts.count("11"), 1000);
//! # Ok::<(), qubit_sim::SimError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bb84;
mod circuit;
mod gates;
mod sim;
mod source;
mod state;

pub mod presets;

pub use bb84::{Basis, Bb84, Bb84Run};
pub use circuit::{Circuit, Counts};
pub use gates::Gate;
pub use sim::{MAX_QUBITS, SimError, Simulator};
pub use source::HadamardSource;
pub use state::Statevector;
