//! The gate set exposed by the demos.

use serde::{Deserialize, Serialize};

/// A gate acting on one or two qubits of a circuit.
///
/// Qubit indices follow the little-endian convention: qubit 0 is the
/// least significant bit of a basis-state index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard: puts a basis state into an equal superposition.
    H(usize),
    /// Pauli-X (bit flip).
    X(usize),
    /// Pauli-Y.
    Y(usize),
    /// Pauli-Z (phase flip).
    Z(usize),
    /// Phase gate: multiplies the `|1⟩` amplitude by `i`.
    S(usize),
    /// Controlled-X.
    Cnot {
        /// Control qubit.
        control: usize,
        /// Target qubit.
        target: usize,
    },
    /// Controlled-Z.
    Cz {
        /// Control qubit.
        control: usize,
        /// Target qubit.
        target: usize,
    },
    /// Exchanges the states of two qubits.
    Swap(usize, usize),
}

impl Gate {
    /// Largest qubit index the gate touches.
    pub fn max_qubit(self) -> usize {
        match self {
            Gate::H(q) | Gate::X(q) | Gate::Y(q) | Gate::Z(q) | Gate::S(q) => q,
            Gate::Cnot { control, target } | Gate::Cz { control, target } => control.max(target),
            Gate::Swap(a, b) => a.max(b),
        }
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gate::H(q) => write!(f, "h q{q}"),
            Gate::X(q) => write!(f, "x q{q}"),
            Gate::Y(q) => write!(f, "y q{q}"),
            Gate::Z(q) => write!(f, "z q{q}"),
            Gate::S(q) => write!(f, "s q{q}"),
            Gate::Cnot { control, target } => write!(f, "cx q{control} q{target}"),
            Gate::Cz { control, target } => write!(f, "cz q{control} q{target}"),
            Gate::Swap(a, b) => write!(f, "swap q{a} q{b}"),
        }
    }
}
