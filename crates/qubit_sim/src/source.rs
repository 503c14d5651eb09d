//! The production randomness source for the game.

use crate::circuit::Circuit;
use crate::presets;
use crate::sim::Simulator;
use qubit_tictactoe::{RandomnessSource, SourceError, Symbol};
use tracing::instrument;

/// Draws symbols by measuring one qubit in equal superposition.
///
/// Each call runs the coin-flip circuit for a single shot; `1` maps to
/// [`Symbol::One`], `0` to [`Symbol::Zero`]. Simulator failures surface
/// as [`SourceError::BackendUnavailable`] - there is no classical
/// fallback, by the demo's own rules.
#[derive(Debug)]
pub struct HadamardSource {
    sim: Simulator,
    circuit: Circuit,
}

impl HadamardSource {
    /// Creates a source backed by an entropy-seeded simulator.
    pub fn new() -> Self {
        Self::with_simulator(Simulator::new())
    }

    /// Creates a deterministic source for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self::with_simulator(Simulator::seeded(seed))
    }

    fn with_simulator(sim: Simulator) -> Self {
        Self {
            sim,
            circuit: presets::coin_flip(),
        }
    }
}

impl Default for HadamardSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomnessSource for HadamardSource {
    #[instrument(skip(self))]
    fn next_symbol(&mut self) -> Result<Symbol, SourceError> {
        let counts = self
            .sim
            .run(&self.circuit, 1)
            .map_err(|err| SourceError::BackendUnavailable(err.to_string()))?;
        match counts.most_frequent() {
            Some("1") => Ok(Symbol::One),
            Some("0") => Ok(Symbol::Zero),
            other => Err(SourceError::BackendUnavailable(format!(
                "unexpected measurement outcome {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_yields_both_symbols() {
        let mut source = HadamardSource::seeded(5);
        let mut ones = 0;
        let mut zeros = 0;
        for _ in 0..200 {
            match source.next_symbol().unwrap() {
                Symbol::One => ones += 1,
                Symbol::Zero => zeros += 1,
            }
        }
        assert!(ones > 0);
        assert!(zeros > 0);
        assert_eq!(ones + zeros, 200);
    }

    #[test]
    fn seeded_sources_agree() {
        let mut a = HadamardSource::seeded(9);
        let mut b = HadamardSource::seeded(9);
        for _ in 0..50 {
            assert_eq!(a.next_symbol().unwrap(), b.next_symbol().unwrap());
        }
    }
}
