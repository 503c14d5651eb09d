//! BB84 quantum key distribution demo.
//!
//! Alice encodes random bits in randomly chosen bases, Bob measures in
//! his own random bases, and the two keep the positions where the bases
//! agree. An intercept-resend eavesdropper measures each qubit in a
//! random basis and re-prepares it, which corrupts about a quarter of
//! the sifted key and gives the demo its punchline.

use crate::circuit::Circuit;
use crate::sim::{SimError, Simulator};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Measurement basis for one qubit of the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Basis {
    /// Computational (Z) basis.
    Z,
    /// Conjugate (X) basis, reached through a Hadamard.
    X,
}

impl std::fmt::Display for Basis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Basis::Z => write!(f, "Z"),
            Basis::X => write!(f, "X"),
        }
    }
}

/// Everything one protocol run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bb84Run {
    /// Whether an eavesdropper intercepted the channel.
    pub eavesdropped: bool,
    /// Alice's raw random bits.
    pub alice_bits: Vec<u8>,
    /// Alice's encoding bases.
    pub alice_bases: Vec<Basis>,
    /// Bob's measurement bases.
    pub bob_bases: Vec<Basis>,
    /// Bob's measured bits.
    pub bob_bits: Vec<u8>,
    /// Alice's bits at positions where the bases agreed.
    pub sifted_alice: Vec<u8>,
    /// Bob's bits at the same positions.
    pub sifted_bob: Vec<u8>,
}

impl Bb84Run {
    /// Length of the sifted key.
    pub fn sifted_len(&self) -> usize {
        self.sifted_alice.len()
    }

    /// Positions of the sifted key where Alice and Bob disagree.
    pub fn mismatches(&self) -> usize {
        self.sifted_alice
            .iter()
            .zip(&self.sifted_bob)
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Error rate over the sifted key; zero on an empty key.
    ///
    /// Without an eavesdropper this is exactly zero; intercept-resend
    /// pushes it toward 25%.
    pub fn error_rate(&self) -> f64 {
        if self.sifted_alice.is_empty() {
            return 0.0;
        }
        self.mismatches() as f64 / self.sifted_alice.len() as f64
    }
}

/// One BB84 session over a simulated quantum channel.
#[derive(Debug)]
pub struct Bb84 {
    sim: Simulator,
}

impl Bb84 {
    /// Creates a session with entropy-seeded randomness.
    pub fn new() -> Self {
        Self {
            sim: Simulator::new(),
        }
    }

    /// Creates a deterministic session for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            sim: Simulator::seeded(seed),
        }
    }

    /// Runs the protocol over `bits` transmitted qubits.
    ///
    /// # Errors
    ///
    /// Propagates simulator failures; a zero-length run is fine and
    /// produces an empty key.
    #[instrument(skip(self))]
    pub fn run(&mut self, bits: usize, eavesdrop: bool) -> Result<Bb84Run, SimError> {
        let mut run = Bb84Run {
            eavesdropped: eavesdrop,
            alice_bits: Vec::with_capacity(bits),
            alice_bases: Vec::with_capacity(bits),
            bob_bases: Vec::with_capacity(bits),
            bob_bits: Vec::with_capacity(bits),
            sifted_alice: Vec::new(),
            sifted_bob: Vec::new(),
        };

        for _ in 0..bits {
            let alice_bit = self.sim.random_bit();
            let alice_basis = self.random_basis();

            // The qubit on the wire, as Alice prepared it.
            let (mut bit, mut basis) = (alice_bit, alice_basis);

            if eavesdrop {
                // Eve measures in her own basis and re-prepares what
                // she saw, destroying Alice's state whenever the two
                // bases differ.
                let eve_basis = self.random_basis();
                let eve_bit = self.measure(bit, basis, eve_basis)?;
                bit = eve_bit;
                basis = eve_basis;
            }

            let bob_basis = self.random_basis();
            let bob_bit = self.measure(bit, basis, bob_basis)?;

            if alice_basis == bob_basis {
                run.sifted_alice.push(alice_bit);
                run.sifted_bob.push(bob_bit);
            }

            run.alice_bits.push(alice_bit);
            run.alice_bases.push(alice_basis);
            run.bob_bases.push(bob_basis);
            run.bob_bits.push(bob_bit);
        }

        Ok(run)
    }

    fn random_basis(&mut self) -> Basis {
        if self.sim.random_bit() == 1 {
            Basis::X
        } else {
            Basis::Z
        }
    }

    /// Prepares `bit` in `prep_basis`, measures in `meas_basis`, one shot.
    fn measure(&mut self, bit: u8, prep_basis: Basis, meas_basis: Basis) -> Result<u8, SimError> {
        let mut qc = Circuit::new(1);
        if bit == 1 {
            qc.x(0);
        }
        if prep_basis == Basis::X {
            qc.h(0);
        }
        if meas_basis == Basis::X {
            qc.h(0);
        }
        let counts = self.sim.run(&qc, 1)?;
        Ok(u8::from(counts.most_frequent() == Some("1")))
    }
}

impl Default for Bb84 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_channel_has_no_sifted_errors() {
        let mut session = Bb84::seeded(21);
        let run = session.run(200, false).unwrap();
        assert_eq!(run.alice_bits.len(), 200);
        assert!(run.sifted_len() > 0);
        assert_eq!(run.mismatches(), 0);
        assert_eq!(run.error_rate(), 0.0);
    }

    #[test]
    fn eavesdropper_leaves_a_trace() {
        // ~25% expected error over the sifted key; over hundreds of
        // sifted bits a zero count is statistically impossible.
        let mut session = Bb84::seeded(22);
        let run = session.run(600, true).unwrap();
        assert!(run.sifted_len() > 100);
        assert!(run.mismatches() > 0);
        assert!(run.error_rate() > 0.05);
    }

    #[test]
    fn empty_run_produces_empty_key() {
        let mut session = Bb84::seeded(23);
        let run = session.run(0, false).unwrap();
        assert_eq!(run.sifted_len(), 0);
        assert_eq!(run.error_rate(), 0.0);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = Bb84::seeded(24).run(50, true).unwrap();
        let b = Bb84::seeded(24).run(50, true).unwrap();
        assert_eq!(a, b);
    }
}
