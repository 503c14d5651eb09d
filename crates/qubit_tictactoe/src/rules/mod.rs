//! Board evaluation rules.

mod draw;
mod win;

pub use draw::is_full;
pub use win::winning_symbol;

use crate::types::{Board, Outcome, Symbol};
use tracing::instrument;

/// Evaluates a board into an [`Outcome`].
///
/// Pure function: a line of `|1⟩` is a player win, a line of `|0⟩` a
/// computer win, a full board with no line a draw, anything else still
/// in progress. Lines are checked diagonals first, then rows, then
/// columns; because a cell is written once, the order only affects
/// which line is reported, never the outcome.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    match winning_symbol(board) {
        Some(Symbol::One) => Outcome::PlayerWin,
        Some(Symbol::Zero) => Outcome::OpponentWin,
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn collapse_all(board: &mut Board, positions: &[Position], symbol: Symbol) {
        for pos in positions {
            board.collapse(*pos, symbol).unwrap();
        }
    }

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn zero_row_is_a_computer_win() {
        // Top row all |0⟩, rest in superposition.
        let mut board = Board::new();
        collapse_all(
            &mut board,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Symbol::Zero,
        );
        assert_eq!(evaluate(&board), Outcome::OpponentWin);
    }

    #[test]
    fn one_column_is_a_player_win() {
        let mut board = Board::new();
        collapse_all(
            &mut board,
            &[Position::TopRight, Position::MiddleRight, Position::BottomRight],
            Symbol::One,
        );
        assert_eq!(evaluate(&board), Outcome::PlayerWin);
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        // 1 0 1 / 1 0 1 / 0 1 0 - no mono-ket line anywhere.
        let mut board = Board::new();
        let ones = [
            Position::TopLeft,
            Position::TopRight,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
        ];
        let zeros = [
            Position::TopCenter,
            Position::Center,
            Position::BottomLeft,
            Position::BottomRight,
        ];
        collapse_all(&mut board, &ones, Symbol::One);
        collapse_all(&mut board, &zeros, Symbol::Zero);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn evaluate_is_idempotent_on_terminal_boards() {
        let mut board = Board::new();
        collapse_all(
            &mut board,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
            Symbol::One,
        );
        let first = evaluate(&board);
        assert_eq!(first, Outcome::PlayerWin);
        for _ in 0..10 {
            assert_eq!(evaluate(&board), first);
        }
    }

    #[test]
    fn adversarial_board_with_two_lines_reports_one_winner() {
        // Random collapses can hand both seats a line; the check order
        // (diagonals, rows, columns) decides which is reported, and the
        // report is deterministic.
        let mut board = Board::new();
        collapse_all(
            &mut board,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Symbol::One,
        );
        collapse_all(
            &mut board,
            &[Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
            Symbol::Zero,
        );
        let outcome = evaluate(&board);
        assert_eq!(outcome, Outcome::PlayerWin);
        assert_eq!(evaluate(&board), outcome);
    }
}
