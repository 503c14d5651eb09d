//! Statistical sanity checks on the measurement backend.

use qubit_sim::{HadamardSource, Simulator, presets};
use qubit_tictactoe::{RandomnessSource, Symbol};

#[test]
fn coin_flip_frequencies_stay_near_half() {
    let mut sim = Simulator::seeded(1234);
    let counts = sim.run(&presets::coin_flip(), 10_000).unwrap();

    // 50% +/- 3% is over six standard deviations at 10k shots.
    let ones = counts.frequency("1");
    assert!(
        (0.47..=0.53).contains(&ones),
        "frequency of |1⟩ drifted to {ones}"
    );
    assert_eq!(counts.count("0") + counts.count("1"), 10_000);
}

#[test]
fn symbol_source_is_unbiased_over_many_draws() {
    let mut source = HadamardSource::seeded(5678);
    let mut ones = 0usize;
    for _ in 0..10_000 {
        if source.next_symbol().unwrap() == Symbol::One {
            ones += 1;
        }
    }
    assert!(
        (4_700..=5_300).contains(&ones),
        "saw {ones} |1⟩ symbols in 10k draws"
    );
}

#[test]
fn bell_counts_split_between_the_correlated_outcomes() {
    let mut sim = Simulator::seeded(91);
    let counts = sim.run(&presets::bell_pair(), 10_000).unwrap();
    assert!((0.47..=0.53).contains(&counts.frequency("00")));
    assert!((0.47..=0.53).contains(&counts.frequency("11")));
}
