//! Line detection.

use crate::position::Position;
use crate::types::{Board, Cell, Symbol};
use tracing::instrument;

/// The eight lines, diagonals first, then rows, then columns.
///
/// The first complete mono-ket line found decides which symbol is
/// reported when a constructed board happens to contain two.
const LINES: [[Position; 3]; 8] = [
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
];

/// Finds a symbol with three collapsed cells in a line, if any.
#[instrument(skip(board))]
pub fn winning_symbol(board: &Board) -> Option<Symbol> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Cell::Collapsed(symbol) = cell {
            if board.get(b) == cell && board.get(c) == cell {
                return Some(symbol);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(winning_symbol(&Board::new()), None);
    }

    #[test]
    fn detects_each_line() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.collapse(pos, Symbol::Zero).unwrap();
            }
            assert_eq!(winning_symbol(&board), Some(Symbol::Zero), "line {line:?}");
        }
    }

    #[test]
    fn incomplete_line_is_not_a_win() {
        let mut board = Board::new();
        board.collapse(Position::TopLeft, Symbol::One).unwrap();
        board.collapse(Position::TopCenter, Symbol::One).unwrap();
        assert_eq!(winning_symbol(&board), None);
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.collapse(Position::TopLeft, Symbol::One).unwrap();
        board.collapse(Position::TopCenter, Symbol::Zero).unwrap();
        board.collapse(Position::TopRight, Symbol::One).unwrap();
        assert_eq!(winning_symbol(&board), None);
    }
}
