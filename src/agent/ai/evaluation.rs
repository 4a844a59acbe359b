// Position evaluation
// Scores are from the perspective of the color passed in (positive = good for it).

use super::weights::WeightTable;
use crate::game_repr::{Color, Move, Position, Result};

/// Sum of table weights over the board: `+w` for `color`'s discs, `-w` for
/// the opponent's, nothing for empty cells.
///
/// Every cell is looked up, so a board larger than the table fails with
/// `IndexOutOfRange` even where the overhang is empty.
pub fn positional(pos: &Position, color: Color, weights: &WeightTable) -> Result<i32> {
    let mut score = 0;
    for row in 0..pos.rows() {
        for col in 0..pos.cols() {
            let weight = weights.get(row, col)?;
            match pos.cells()[pos.index(row, col)].color() {
                Some(owner) if owner == color => score += weight,
                Some(_) => score -= weight,
                None => {}
            }
        }
    }
    Ok(score)
}

/// Disc-count change since `root` for `color` minus the opponent's, plus the
/// table weight of `last_move`.
///
/// This is the leaf evaluator of the minimax search. It only reads the cached
/// scores and one table entry, so it costs O(1) per leaf. A missing
/// `last_move` (a leaf at the root itself) contributes no bonus.
pub fn differential(
    root: &Position,
    leaf: &Position,
    color: Color,
    last_move: Option<Move>,
    weights: &WeightTable,
) -> Result<i32> {
    let (root_black, root_white) = root.scores();
    let (leaf_black, leaf_white) = leaf.scores();

    let black_gain = leaf_black as i32 - root_black as i32;
    let white_gain = leaf_white as i32 - root_white as i32;
    let delta = match color {
        Color::Black => black_gain - white_gain,
        Color::White => white_gain - black_gain,
    };

    let bonus = match last_move {
        Some(mv) => weights.get(mv.row, mv.col)?,
        None => 0,
    };
    Ok(delta + bonus)
}

/// Legal-move count for `color` minus the opponent's.
///
/// Alternative scoring mode; neither the search nor the built-in players use it.
///
/// Peeks at each side by switching the turn in place; the original turn is
/// restored before returning.
pub fn mobility(pos: &mut Position, color: Color) -> i32 {
    let original = pos.turn();

    let own = moves_as(pos, color);
    let theirs = moves_as(pos, color.opposite());

    if pos.turn() != original {
        pos.switch_turn();
    }
    own - theirs
}

fn moves_as(pos: &mut Position, side: Color) -> i32 {
    if pos.turn() != side {
        pos.switch_turn();
    }
    pos.legal_moves().len() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_is_equal() {
        let pos = Position::default();
        let weights = WeightTable::default();
        assert_eq!(positional(&pos, Color::Black, &weights).unwrap(), 0);
        assert_eq!(positional(&pos, Color::White, &weights).unwrap(), 0);
    }

    #[test]
    fn test_differential_at_root_is_move_bonus() {
        let pos = Position::default();
        let weights = WeightTable::default();
        assert_eq!(differential(&pos, &pos, Color::Black, None, &weights).unwrap(), 0);
        assert_eq!(
            differential(&pos, &pos, Color::Black, Some(Move::new(0, 0)), &weights).unwrap(),
            100
        );
    }

    #[test]
    fn test_mobility_restores_turn() {
        let mut pos = Position::default();
        assert_eq!(mobility(&mut pos, Color::White), 0);
        assert_eq!(pos.turn(), Color::Black);
    }
}
