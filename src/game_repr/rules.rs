//! Line scanning: which cells capture, which moves are legal, when the game ends.

use super::{Color, Move, Position, Result};
use smallvec::SmallVec;

pub type MoveList = SmallVec<[Move; 32]>;

/// The 8 compass directions as `(row_delta, col_delta)`, row-major.
#[rustfmt::skip]
pub const DIRECTIONS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// True when, walking from `(row, col)` along `(dr, dc)`, there is a run of
/// at least one opponent disc closed off by a disc of `color`. Hitting the
/// edge or an empty cell first means no capture.
pub fn captures_in_direction(
    pos: &Position,
    row: usize,
    col: usize,
    dr: i64,
    dc: i64,
    color: Color,
) -> bool {
    let own = color.to_cell();
    let opponent = color.opposite().to_cell();

    let mut r = row as i64 + dr;
    let mut c = col as i64 + dc;
    let mut run = 0;

    while pos.in_bounds(r, c) {
        let cell = pos.cells()[pos.index(r as usize, c as usize)];
        if cell == opponent {
            run += 1;
        } else {
            return cell == own && run > 0;
        }
        r += dr;
        c += dc;
    }

    false
}

/// Directions in which a `color` disc placed on `(row, col)` would flip.
/// Empty for occupied or off-board cells.
pub fn capturing_directions(
    pos: &Position,
    row: usize,
    col: usize,
    color: Color,
) -> SmallVec<[(i64, i64); 8]> {
    let mut dirs = SmallVec::new();
    if !matches!(pos.cell(row, col), Some(c) if c.is_empty()) {
        return dirs;
    }
    for (dr, dc) in DIRECTIONS {
        if captures_in_direction(pos, row, col, dr, dc, color) {
            dirs.push((dr, dc));
        }
    }
    dirs
}

pub fn is_legal_move(pos: &Position, mv: Move, color: Color) -> bool {
    !capturing_directions(pos, mv.row, mv.col, color).is_empty()
}

/// Legal placements for `color`, each cell once, in row-major order.
pub fn legal_moves_for(pos: &Position, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for row in 0..pos.rows() {
        for col in 0..pos.cols() {
            let mv = Move::new(row, col);
            if is_legal_move(pos, mv, color) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Legal placements for the side to move.
pub fn legal_moves(pos: &Position) -> MoveList {
    legal_moves_for(pos, pos.turn())
}

/// Whether `color` has at least one legal move; does not look at the turn.
pub fn can_move(pos: &Position, color: Color) -> bool {
    (0..pos.rows()).any(|row| (0..pos.cols()).any(|col| is_legal_move(pos, Move::new(row, col), color)))
}

pub fn is_game_over(pos: &Position) -> bool {
    !can_move(pos, Color::Black) && !can_move(pos, Color::White)
}

/// Count leaf positions `depth` plies ahead. A side with no move ends the
/// line (turn skips are folded into `make_move_undoable`).
pub fn perft(pos: &Position, depth: u32) -> Result<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = legal_moves(pos);
    if moves.is_empty() {
        return Ok(1);
    }
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut scratch = pos.clone();
    let mut nodes = 0;
    for mv in moves {
        let undo = scratch.make_move_undoable(mv)?;
        nodes += perft(&scratch, depth - 1)?;
        scratch.unmake_move(undo);
    }
    Ok(nodes)
}
