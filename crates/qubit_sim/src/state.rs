//! Dense statevector representation.

use crate::gates::Gate;
use crate::sim::{MAX_QUBITS, SimError};
use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::FRAC_1_SQRT_2;

/// A normalized n-qubit state over `2^n` complex amplitudes.
///
/// Qubit 0 is the least significant bit of a basis-state index;
/// bitstrings are rendered most-significant qubit first, matching the
/// counts the demos display.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    amplitudes: Vec<Complex64>,
    qubits: usize,
}

impl Statevector {
    /// Creates the all-zeros state `|0..0⟩`.
    ///
    /// # Errors
    ///
    /// [`SimError::UnsupportedQubitCount`] outside `1..=MAX_QUBITS`.
    pub fn zero(qubits: usize) -> Result<Self, SimError> {
        if qubits == 0 || qubits > MAX_QUBITS {
            return Err(SimError::UnsupportedQubitCount(qubits));
        }
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self { amplitudes, qubits })
    }

    /// Number of qubits.
    pub fn qubits(&self) -> usize {
        self.qubits
    }

    /// The raw amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Measurement probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Applies a gate in place.
    ///
    /// # Errors
    ///
    /// [`SimError::QubitOutOfRange`] if the gate touches a qubit the
    /// state does not have.
    pub fn apply(&mut self, gate: Gate) -> Result<(), SimError> {
        if gate.max_qubit() >= self.qubits {
            return Err(SimError::QubitOutOfRange {
                qubit: gate.max_qubit(),
                qubits: self.qubits,
            });
        }
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        match gate {
            Gate::H(q) => self.apply_single(q, [[h, h], [h, -h]]),
            Gate::X(q) => self.apply_single(
                q,
                [[zero, one], [one, zero]],
            ),
            Gate::Y(q) => self.apply_single(
                q,
                [[zero, -i], [i, zero]],
            ),
            Gate::Z(q) => self.apply_single(
                q,
                [[one, zero], [zero, -one]],
            ),
            Gate::S(q) => self.apply_single(
                q,
                [[one, zero], [zero, i]],
            ),
            Gate::Cnot { control, target } => {
                for i in 0..self.amplitudes.len() {
                    if i & (1 << control) != 0 && i & (1 << target) == 0 {
                        self.amplitudes.swap(i, i | (1 << target));
                    }
                }
            }
            Gate::Cz { control, target } => {
                for (i, amp) in self.amplitudes.iter_mut().enumerate() {
                    if i & (1 << control) != 0 && i & (1 << target) != 0 {
                        *amp = -*amp;
                    }
                }
            }
            Gate::Swap(a, b) => {
                for i in 0..self.amplitudes.len() {
                    if i & (1 << a) != 0 && i & (1 << b) == 0 {
                        self.amplitudes.swap(i, (i & !(1 << a)) | (1 << b));
                    }
                }
            }
        }
        Ok(())
    }

    fn apply_single(&mut self, q: usize, m: [[Complex64; 2]; 2]) {
        let mask = 1 << q;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = m[0][0] * a + m[0][1] * b;
                self.amplitudes[j] = m[1][0] * a + m[1][1] * b;
            }
        }
    }

    /// Samples one basis-state index from the measurement distribution.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let draw: f64 = rng.random();
        let mut cumulative = 0.0;
        for (index, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if draw < cumulative {
                return index;
            }
        }
        // Floating-point residue: fall back to the last basis state.
        self.amplitudes.len() - 1
    }
}
