//! Structural invariants checked in debug builds and tests.

use crate::game::GameState;
use crate::position::Position;
use tracing::warn;

/// Histories and board agree: every recorded cell has collapsed, no
/// cell was recorded twice, and the collapsed-cell count equals the
/// total history length.
pub fn histories_consistent(state: &GameState) -> bool {
    let mut seen = std::collections::BTreeSet::new();
    for pos in state
        .player_history()
        .iter()
        .chain(state.opponent_history())
    {
        if !seen.insert(*pos) {
            warn!(position = %pos, "cell recorded in two histories");
            return false;
        }
        if state.board().is_open(*pos) {
            warn!(position = %pos, "recorded cell is still in superposition");
            return false;
        }
    }

    let collapsed = Position::ALL
        .into_iter()
        .filter(|pos| !state.board().is_open(*pos))
        .count();
    let recorded = state.player_history().len() + state.opponent_history().len();
    if collapsed != recorded {
        warn!(collapsed, recorded, "history length does not match board");
        return false;
    }
    true
}
