//! Command-line interface.

use clap::{Parser, Subcommand, ValueEnum};

/// Quantum tic-tac-toe and its quantum demos, in the terminal.
#[derive(Parser, Debug)]
#[command(name = "qubit_tictactoe_tui")]
#[command(about = "Quantum tic-tac-toe: cells collapse to measured kets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play quantum tic-tac-toe interactively
    Play {
        /// Seed for the measurement backend (reproducible sessions)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the BB84 key-distribution simulation
    Bb84 {
        /// Number of qubits Alice transmits
        #[arg(long, default_value = "50")]
        bits: usize,

        /// Put an intercept-resend eavesdropper on the channel
        #[arg(long)]
        eavesdrop: bool,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Sample measurement counts from a demo circuit
    Sample {
        /// Which circuit to sample
        #[arg(value_enum)]
        demo: Demo,

        /// Number of shots
        #[arg(long, default_value = "1000")]
        shots: usize,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Demo circuits exposed by `sample`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// One qubit behind a Hadamard: a fair quantum coin
    Superposition,
    /// The Bell pair: two perfectly correlated qubits
    Bell,
}
