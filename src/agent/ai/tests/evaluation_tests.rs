// Tests for the positional, differential and mobility evaluators

use crate::agent::ai::evaluation::{differential, mobility, positional};
use crate::agent::ai::weights::WeightTable;
use crate::game_repr::{Color, GameError, Move, Position};

fn after(moves: &[(usize, usize)]) -> Position {
    let mut pos = Position::default();
    for &(row, col) in moves {
        pos.apply_move(row, col).unwrap();
    }
    pos
}

#[test]
fn test_positional_after_opening_move() {
    let pos = after(&[(2, 3)]);
    let weights = WeightTable::default();

    // Black: (2,3)=1 plus three center cells at 2; White keeps (4,4)=2
    assert_eq!(positional(&pos, Color::Black, &weights).unwrap(), 5);
    assert_eq!(positional(&pos, Color::White, &weights).unwrap(), -5);
}

#[test]
fn test_positional_is_zero_sum() {
    let pos = after(&[(2, 3), (2, 2), (3, 2), (4, 2)]);
    let weights = WeightTable::default();

    let black = positional(&pos, Color::Black, &weights).unwrap();
    let white = positional(&pos, Color::White, &weights).unwrap();
    assert_eq!(black, -white);
}

#[test]
fn test_positional_rewards_corners() {
    let weights = WeightTable::default();
    let corner = Position::from_layout(
        &["B...", ".WB.", ".BW.", "...."],
        Color::White,
    )
    .unwrap();
    let x_square = Position::from_layout(
        &["....", ".BB.", ".BW.", "...."],
        Color::White,
    )
    .unwrap();

    assert!(
        positional(&corner, Color::Black, &weights).unwrap()
            > positional(&x_square, Color::Black, &weights).unwrap()
    );
}

#[test]
fn test_positional_beyond_table_fails() {
    // The overhang is empty but every cell is still looked up
    let pos = Position::new(10, 10, Color::Black).unwrap();
    let result = positional(&pos, Color::Black, &WeightTable::default());

    assert_eq!(
        result,
        Err(GameError::IndexOutOfRange {
            row: 0,
            col: 8,
            rows: 8,
            cols: 8
        })
    );
}

#[test]
fn test_positional_with_custom_table() {
    let weights = WeightTable::from_rows(&vec![vec![1; 4]; 4]).unwrap();
    let pos = Position::new(4, 4, Color::Black).unwrap();
    assert_eq!(positional(&pos, Color::Black, &weights).unwrap(), 0);

    let pos = after_on(pos, &[(0, 1)]);
    // Black 4 discs, White 1
    assert_eq!(positional(&pos, Color::Black, &weights).unwrap(), 3);
}

fn after_on(mut pos: Position, moves: &[(usize, usize)]) -> Position {
    for &(row, col) in moves {
        pos.apply_move(row, col).unwrap();
    }
    pos
}

#[test]
fn test_differential_sign_follows_color() {
    let root = Position::default();
    let leaf = after(&[(2, 3)]);
    let weights = WeightTable::default();

    // Black went 2 -> 4, White 2 -> 1
    assert_eq!(differential(&root, &leaf, Color::Black, None, &weights).unwrap(), 3);
    assert_eq!(differential(&root, &leaf, Color::White, None, &weights).unwrap(), -3);
}

#[test]
fn test_differential_bonus_is_not_negated() {
    let root = Position::default();
    let leaf = after(&[(2, 3)]);
    let weights = WeightTable::default();
    let corner = Some(Move::new(7, 7));

    assert_eq!(differential(&root, &leaf, Color::Black, corner, &weights).unwrap(), 103);
    assert_eq!(differential(&root, &leaf, Color::White, corner, &weights).unwrap(), 97);
}

#[test]
fn test_differential_bonus_beyond_table_fails() {
    let root = Position::new(10, 10, Color::Black).unwrap();
    let result = differential(
        &root,
        &root,
        Color::Black,
        Some(Move::new(9, 0)),
        &WeightTable::default(),
    );
    assert!(matches!(result, Err(GameError::IndexOutOfRange { row: 9, .. })));
}

#[test]
fn test_mobility_counts_both_sides() {
    // White has no capture available, Black has exactly one
    let mut pos = Position::from_layout(&["BW..", "....", "....", "...."], Color::White).unwrap();

    assert_eq!(mobility(&mut pos, Color::Black), 1);
    assert_eq!(pos.turn(), Color::White);
    assert_eq!(mobility(&mut pos, Color::White), -1);
    assert_eq!(pos.turn(), Color::White);
}

#[test]
fn test_mobility_leaves_board_unchanged() {
    let mut pos = after(&[(2, 3), (2, 2)]);
    let before = pos.clone();

    mobility(&mut pos, Color::Black);
    mobility(&mut pos, Color::White);
    assert_eq!(pos, before);
}
