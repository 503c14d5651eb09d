//! The randomness capability seam.
//!
//! Symbols come from a binary quantum measurement, not a PRNG; that
//! claim is the point of the demo, so a dead backend surfaces as an
//! error instead of silently falling back to classical randomness.

use crate::types::Symbol;
use tracing::instrument;

/// A source of unbiased measured symbols, one per call.
///
/// Production wiring measures a qubit in superposition; tests can
/// substitute [`ScriptedSource`].
pub trait RandomnessSource {
    /// Draws the next symbol.
    ///
    /// # Errors
    ///
    /// [`SourceError::BackendUnavailable`] if the measurement backend
    /// fails to respond. Fatal to the current interaction; never retried.
    fn next_symbol(&mut self) -> Result<Symbol, SourceError>;
}

/// Error raised by a randomness source.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SourceError {
    /// The measurement backend did not produce an outcome.
    #[display("measurement backend unavailable: {}", _0)]
    BackendUnavailable(String),
}

impl std::error::Error for SourceError {}

/// Deterministic source that replays a fixed script of symbols.
///
/// Intended for tests and reproducible walkthroughs; an exhausted
/// script behaves like an unavailable backend.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    symbols: std::collections::VecDeque<Symbol>,
}

impl ScriptedSource {
    /// Creates a source that yields the given symbols in order.
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Remaining scripted symbols.
    pub fn remaining(&self) -> usize {
        self.symbols.len()
    }
}

impl RandomnessSource for ScriptedSource {
    #[instrument(skip(self))]
    fn next_symbol(&mut self) -> Result<Symbol, SourceError> {
        self.symbols
            .pop_front()
            .ok_or_else(|| SourceError::BackendUnavailable("script exhausted".into()))
    }
}
