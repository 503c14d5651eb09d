//! End-to-end checks of the rules engine through its public API.

use qubit_tictactoe::{
    Board, GameState, Move, MoveError, Outcome, Position, ScriptedSource, Seat, Symbol, play_turn,
    rules,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn pos(n: u8) -> Position {
    Position::from_number(n).unwrap()
}

#[test]
fn zero_row_evaluates_to_computer_win() {
    let mut board = Board::new();
    for n in [1, 2, 3] {
        board.collapse(pos(n), Symbol::Zero).unwrap();
    }
    assert_eq!(rules::evaluate(&board), Outcome::OpponentWin);
}

#[test]
fn full_mixed_board_evaluates_to_draw() {
    // 1 0 1 / 0 1 1 / 0 1 0 - no aligned triple of either ket.
    let mut board = Board::new();
    for (n, symbol) in [
        (1, Symbol::One),
        (2, Symbol::Zero),
        (3, Symbol::One),
        (4, Symbol::Zero),
        (5, Symbol::One),
        (6, Symbol::One),
        (7, Symbol::Zero),
        (8, Symbol::One),
        (9, Symbol::Zero),
    ] {
        board.collapse(pos(n), symbol).unwrap();
    }
    assert_eq!(rules::evaluate(&board), Outcome::Draw);
}

#[test]
fn center_move_on_empty_board_stays_in_progress() {
    let mut state = GameState::new();
    let outcome = state
        .apply_move(Move::new(Seat::Player, pos(5), Symbol::One))
        .unwrap();
    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(
        state.board().get(pos(5)).symbol(),
        Some(Symbol::One)
    );
}

#[test]
fn second_move_on_same_cell_fails() {
    let mut state = GameState::new();
    state
        .apply_move(Move::new(Seat::Player, pos(5), Symbol::One))
        .unwrap();
    let err = state
        .apply_move(Move::new(Seat::Player, pos(5), Symbol::One))
        .unwrap_err();
    assert_eq!(err, MoveError::Occupied(pos(5)));
}

#[test]
fn out_of_range_cell_numbers_never_reach_the_board() {
    for n in [0u8, 10, 42, 255] {
        assert_eq!(Position::from_number(n), Err(MoveError::OutOfRange(n)));
    }
}

#[test]
fn scripted_session_reaches_a_terminal_outcome() {
    // Every cell the player picks collapses to |1⟩ and every computer
    // cell to |0⟩, so some line must complete within five exchanges.
    let mut state = GameState::new();
    let mut source = ScriptedSource::new(
        [
            Symbol::One,
            Symbol::Zero,
            Symbol::One,
            Symbol::Zero,
            Symbol::One,
            Symbol::Zero,
            Symbol::One,
            Symbol::Zero,
            Symbol::One,
        ],
    );
    let mut rng = StdRng::seed_from_u64(99);

    let mut exchanges = 0;
    while !state.is_over() {
        let next = *state.open_positions().iter().next().unwrap();
        play_turn(&mut state, next, &mut source, &mut rng).unwrap();
        exchanges += 1;
        assert!(exchanges <= 5, "nine cells cannot take more than five exchanges");
    }

    assert!(state.outcome().is_terminal());
    assert!(qubit_tictactoe::invariants::histories_consistent(&state));
}
