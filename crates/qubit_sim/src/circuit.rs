//! Circuits and measurement counts.

use crate::gates::Gate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An ordered list of gates on a fixed number of qubits, ending in a
/// measurement of every qubit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    qubits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates an empty circuit on the given number of qubits.
    pub fn new(qubits: usize) -> Self {
        Self {
            qubits,
            gates: Vec::new(),
        }
    }

    /// Number of qubits.
    pub fn qubits(&self) -> usize {
        self.qubits
    }

    /// The gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Appends a gate.
    pub fn push(&mut self, gate: Gate) -> &mut Self {
        self.gates.push(gate);
        self
    }

    /// Appends a Hadamard on `q`.
    pub fn h(&mut self, q: usize) -> &mut Self {
        self.push(Gate::H(q))
    }

    /// Appends a Pauli-X on `q`.
    pub fn x(&mut self, q: usize) -> &mut Self {
        self.push(Gate::X(q))
    }

    /// Appends a CNOT.
    pub fn cnot(&mut self, control: usize, target: usize) -> &mut Self {
        self.push(Gate::Cnot { control, target })
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} qubit(s):", self.qubits)?;
        for gate in &self.gates {
            write!(f, " {gate};")?;
        }
        Ok(())
    }
}

/// Bitstring tallies from a batch of shots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    shots: usize,
    counts: HashMap<String, usize>,
}

impl Counts {
    pub(crate) fn new() -> Self {
        Self {
            shots: 0,
            counts: HashMap::new(),
        }
    }

    pub(crate) fn record(&mut self, bitstring: String) {
        self.shots += 1;
        *self.counts.entry(bitstring).or_insert(0) += 1;
    }

    /// Total number of shots recorded.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Times the given bitstring was observed.
    pub fn count(&self, bitstring: &str) -> usize {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Empirical frequency of the given bitstring.
    pub fn frequency(&self, bitstring: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.count(bitstring) as f64 / self.shots as f64
    }

    /// The most observed bitstring; ties break toward the smaller
    /// bitstring so the result is deterministic.
    pub fn most_frequent(&self) -> Option<&str> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(bitstring, _)| bitstring.as_str())
    }

    /// Observed bitstrings and tallies in lexicographic order.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(bitstring, count)| (bitstring.as_str(), *count))
            .collect();
        entries.sort();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_appends_in_order() {
        let mut qc = Circuit::new(2);
        qc.h(0).cnot(0, 1);
        assert_eq!(
            qc.gates(),
            &[
                Gate::H(0),
                Gate::Cnot {
                    control: 0,
                    target: 1
                }
            ]
        );
        assert_eq!(qc.to_string(), "2 qubit(s): h q0; cx q0 q1;");
    }

    #[test]
    fn counts_tally_and_normalize() {
        let mut counts = Counts::new();
        for bits in ["00", "11", "11", "00"] {
            counts.record(bits.to_string());
        }
        assert_eq!(counts.shots(), 4);
        assert_eq!(counts.count("11"), 2);
        assert_eq!(counts.count("01"), 0);
        assert!((counts.frequency("00") - 0.5).abs() < 1e-12);
        assert_eq!(counts.sorted(), vec![("00", 2), ("11", 2)]);
    }

    #[test]
    fn most_frequent_breaks_ties_deterministically() {
        let mut counts = Counts::new();
        counts.record("1".to_string());
        counts.record("0".to_string());
        assert_eq!(counts.most_frequent(), Some("0"));

        counts.record("1".to_string());
        assert_eq!(counts.most_frequent(), Some("1"));
    }
}
