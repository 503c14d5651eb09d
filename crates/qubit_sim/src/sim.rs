//! Shot execution.

use crate::circuit::{Circuit, Counts};
use crate::state::Statevector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Dense simulation is exponential in qubits; the demos use one or two,
/// so this bound is generous.
pub const MAX_QUBITS: usize = 16;

/// Error raised while simulating a circuit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// A gate addressed a qubit the circuit does not have.
    #[error("qubit {qubit} out of range for a {qubits}-qubit state")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: usize,
        /// Qubits in the state.
        qubits: usize,
    },
    /// The qubit count is zero or beyond [`MAX_QUBITS`].
    #[error("unsupported qubit count {0} (expected 1-{MAX_QUBITS})")]
    UnsupportedQubitCount(usize),
    /// A run was requested with zero shots.
    #[error("shot count must be nonzero")]
    NoShots,
}

/// Executes circuits by evolving a statevector and sampling terminal
/// measurements.
#[derive(Debug)]
pub struct Simulator {
    rng: StdRng,
}

impl Simulator {
    /// Creates a simulator sampling from operating-system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a deterministic simulator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Runs the circuit and tallies the measured bitstrings.
    ///
    /// Bitstrings are rendered most-significant qubit first.
    ///
    /// # Errors
    ///
    /// [`SimError::NoShots`] for a zero shot count, plus any state
    /// construction or gate application error.
    #[instrument(skip(self, circuit), fields(qubits = circuit.qubits(), shots))]
    pub fn run(&mut self, circuit: &Circuit, shots: usize) -> Result<Counts, SimError> {
        if shots == 0 {
            return Err(SimError::NoShots);
        }
        let mut state = Statevector::zero(circuit.qubits())?;
        for gate in circuit.gates() {
            state.apply(*gate)?;
        }

        let mut counts = Counts::new();
        for _ in 0..shots {
            let index = state.sample(&mut self.rng);
            counts.record(bitstring(index, circuit.qubits()));
        }
        Ok(counts)
    }

    /// Draws one classical bit from the simulator's entropy pool.
    ///
    /// Used for the classical choices of the protocol demos (bases,
    /// message bits); measurement outcomes always go through [`run`].
    ///
    /// [`run`]: Simulator::run
    pub fn random_bit(&mut self) -> u8 {
        u8::from(self.rng.random::<bool>())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a basis-state index as a bitstring, qubit `n-1` first.
fn bitstring(index: usize, qubits: usize) -> String {
    (0..qubits)
        .rev()
        .map(|q| if index & (1 << q) != 0 { '1' } else { '0' })
        .collect()
}
