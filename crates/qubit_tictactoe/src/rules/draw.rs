//! Draw detection.

use crate::types::Board;
use tracing::instrument;

/// Checks if every cell has collapsed.
///
/// A full board with no winning line is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Symbol;
    use strum::IntoEnumIterator;

    #[test]
    fn empty_board_is_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn partial_board_is_not_full() {
        let mut board = Board::new();
        board.collapse(Position::Center, Symbol::One).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn collapsed_everywhere_is_full() {
        let mut board = Board::new();
        for pos in Position::iter() {
            board.collapse(pos, Symbol::Zero).unwrap();
        }
        assert!(is_full(&board));
    }
}
