//! Tests for the pure move validator and outcome evaluator.

use othello_tui::{evaluate_outcome, is_legal, Board, Cell, Move, Side, Winner};

/// Builds a board from integer rows (`0` empty, `1` black, `-1` white).
fn board_of(rows: &[&[i8]]) -> Board {
    let cells = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| match v {
                    0 => Cell::Empty,
                    1 => Cell::Occupied(Side::Black),
                    -1 => Cell::Occupied(Side::White),
                    other => panic!("bad test cell {other}"),
                })
                .collect()
        })
        .collect();
    Board::from_rows(cells).expect("square test board")
}

/// Builds a full 8x8 board holding exactly `black` black discs, the rest white.
fn full_board(black: usize) -> Board {
    assert!(black <= 64, "more discs than cells");
    let rows: Vec<Vec<Cell>> = (0..8)
        .map(|r| {
            (0..8)
                .map(|c| {
                    if r * 8 + c < black {
                        Cell::Occupied(Side::Black)
                    } else {
                        Cell::Occupied(Side::White)
                    }
                })
                .collect()
        })
        .collect();
    Board::from_rows(rows).expect("square test board")
}

#[test]
fn test_validator_is_membership_only() {
    let legal = vec![Move::new(2, 3), Move::new(3, 2)];
    assert!(is_legal(Move::new(2, 3), &legal));
    assert!(is_legal(Move::new(3, 2), &legal));
    assert!(!is_legal(Move::new(0, 0), &legal));
    assert!(!is_legal(Move::new(2, 3), &[]));
}

#[test]
fn test_outcome_none_while_any_cell_empty() {
    let board = board_of(&[&[1, -1], &[0, 1]]);
    assert!(evaluate_outcome(&board).is_none());
}

#[test]
fn test_outcome_black_majority() {
    let board = full_board(34);
    let outcome = evaluate_outcome(&board).expect("full board");
    assert_eq!(outcome.winner, Winner::Black);
    assert_eq!(outcome.black, 34);
    assert_eq!(outcome.white, 30);
}

#[test]
fn test_outcome_white_majority() {
    let board = full_board(30);
    let outcome = evaluate_outcome(&board).expect("full board");
    assert_eq!(outcome.winner, Winner::White);
    assert_eq!((outcome.black, outcome.white), (30, 34));
}

#[test]
fn test_outcome_draw_on_equal_counts() {
    let board = full_board(32);
    let outcome = evaluate_outcome(&board).expect("full board");
    assert_eq!(outcome.winner, Winner::Draw);
    assert_eq!((outcome.black, outcome.white), (32, 32));
}

#[test]
fn test_outcome_idempotent() {
    let board = full_board(34);
    assert_eq!(evaluate_outcome(&board), evaluate_outcome(&board));

    let open = board_of(&[&[1, 0], &[-1, 1]]);
    assert_eq!(evaluate_outcome(&open), None);
    assert_eq!(evaluate_outcome(&open), None);
}

#[test]
fn test_board_rejects_non_square_rows() {
    let rows = vec![
        vec![Cell::Empty, Cell::Empty],
        vec![Cell::Empty],
    ];
    assert!(Board::from_rows(rows).is_err());
}

#[test]
fn test_board_counts() {
    let board = board_of(&[&[1, -1], &[0, 1]]);
    assert_eq!(board.size(), 2);
    assert_eq!(board.count(Side::Black), 2);
    assert_eq!(board.count(Side::White), 1);
    assert_eq!(board.empty_count(), 1);
    assert!(!board.is_full());
}
