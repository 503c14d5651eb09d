//! Circuits behind the demo pages.

use crate::circuit::Circuit;

/// One qubit in equal superposition: `H` then measure.
///
/// A single shot is an unbiased coin; this is the circuit behind the
/// game's randomness source and the superposition demo.
pub fn coin_flip() -> Circuit {
    let mut qc = Circuit::new(1);
    qc.h(0);
    qc
}

/// The `(|00⟩ + |11⟩)/√2` Bell pair: `H` on qubit 0, then CNOT.
///
/// Measured shots land on `00` or `11` only, never on the
/// anti-correlated outcomes; this is the entanglement demo.
pub fn bell_pair() -> Circuit {
    let mut qc = Circuit::new(2);
    qc.h(0).cnot(0, 1);
    qc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Simulator;

    #[test]
    fn coin_flip_has_both_outcomes_over_many_shots() {
        let mut sim = Simulator::seeded(11);
        let counts = sim.run(&coin_flip(), 1000).unwrap();
        assert_eq!(counts.shots(), 1000);
        assert!(counts.count("0") > 0);
        assert!(counts.count("1") > 0);
        assert_eq!(counts.count("0") + counts.count("1"), 1000);
    }

    #[test]
    fn bell_pair_is_perfectly_correlated() {
        let mut sim = Simulator::seeded(12);
        let counts = sim.run(&bell_pair(), 1000).unwrap();
        assert_eq!(counts.count("00") + counts.count("11"), 1000);
    }
}
