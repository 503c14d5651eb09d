//! Application state for the interactive game.

use qubit_sim::HadamardSource;
use qubit_tictactoe::{Exchange, GameState, MoveError, Position, TurnError, play_turn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

const PROMPT: &str = "Press 1-9 to collapse a cell. You claim |1⟩, the computer |0⟩.";

/// State behind the interactive screen: the session plus its wiring.
pub struct App {
    state: GameState,
    source: HadamardSource,
    rng: StdRng,
    seed: Option<u64>,
    status: String,
}

impl App {
    /// Creates an app; a seed makes the whole session reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let (source, rng) = match seed {
            Some(seed) => (HadamardSource::seeded(seed), StdRng::seed_from_u64(seed)),
            None => (HadamardSource::new(), StdRng::from_os_rng()),
        };
        Self {
            state: GameState::new(),
            source,
            rng,
            seed,
            status: PROMPT.to_string(),
        }
    }

    /// The current session.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Submits the cell number the player pressed.
    pub fn submit(&mut self, n: u8) {
        if self.state.is_over() {
            self.status = format!("{} Press 'r' to restart or 'q' to quit.", self.state.outcome());
            return;
        }

        let position = match Position::from_number(n) {
            Ok(position) => position,
            Err(err) => {
                // Unreachable through the key bindings.
                warn!(%err, "rejected cell number");
                self.status = err.to_string();
                return;
            }
        };

        debug!(%position, "submitting move");
        match play_turn(&mut self.state, position, &mut self.source, &mut self.rng) {
            Ok(exchange) => self.status = describe(&exchange),
            Err(TurnError::Move(MoveError::Occupied(position))) => {
                self.status = format!("Cell {position} has already collapsed. Pick another.");
            }
            Err(TurnError::Move(err)) => {
                self.status = err.to_string();
            }
            Err(TurnError::Source(err)) => {
                // Fatal to this move; surfaced, never retried.
                self.status = format!("Move aborted: {err}");
            }
        }
    }

    /// Starts a fresh session, keeping the seed if one was given.
    pub fn restart(&mut self) {
        *self = Self::new(self.seed);
    }
}

fn describe(exchange: &Exchange) -> String {
    let mut line = format!(
        "Your cell {} collapsed to {}.",
        exchange.player.position, exchange.player.symbol
    );
    if let Some(reply) = exchange.opponent {
        line.push_str(&format!(
            " Computer took cell {}: {}.",
            reply.position, reply.symbol
        ));
    }
    if exchange.outcome.is_terminal() {
        line.push_str(&format!(
            " {} Press 'r' to restart or 'q' to quit.",
            exchange.outcome
        ));
    }
    line
}
