// Minimax Search with Alpha-Beta Pruning
//
// Depth-limited minimax over Othello positions. Leaves are scored with the
// differential evaluator against the position the search started from, so the
// searching color and the root position travel with the search in a
// `SearchContext` instead of living on the player.
//
// Move choice depends on two fixed rules:
// - ties go to the LAST move in enumeration order reaching the best score
// - a maximizing node stops once best_score > beta (strict), a minimizing
//   node once best_score < alpha, both checked after alpha/beta are updated
//
// Nodes alternate maximizing/minimizing by ply, even across a turn skip.

use super::evaluation::differential;
use super::weights::WeightTable;
use crate::game_repr::{Color, Move, Position, Result};
use std::time::Instant;

/// Stand-in for -infinity
pub const NEG_INFINITY: i32 = i32::MIN;

/// Stand-in for +infinity
pub const POS_INFINITY: i32 = i32::MAX;

/// Search horizon used when nothing else is configured
pub const DEFAULT_DEPTH: u8 = 5;

/// Per-search state. Created for one root call and dropped with it.
pub struct SearchContext<'a> {
    root: &'a Position,
    color: Color,
    weights: &'a WeightTable,
    nodes: u64,
}

impl<'a> SearchContext<'a> {
    /// Search on behalf of the side to move in `root`.
    pub fn new(root: &'a Position, weights: &'a WeightTable) -> Self {
        Self {
            root,
            color: root.turn(),
            weights,
            nodes: 0,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn evaluate(&self, leaf: &Position, last_move: Option<Move>) -> Result<i32> {
        differential(self.root, leaf, self.color, last_move, self.weights)
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

/// Minimax search with alpha-beta pruning
///
/// # Arguments
///
/// * `ctx` - Root position, searching color and weights for leaf scoring
/// * `pos` - Current position; moves are made and unmade in place, so it is
///   left exactly as it was passed in
/// * `depth` - Remaining plies (0 = leaf)
/// * `alpha` / `beta` - Current window
/// * `maximizing` - Whether this ply picks the max for the searching color
/// * `last_move` - Move that produced `pos`, used for the leaf move bonus
///
/// # Returns
///
/// (score, best_move). Leaves return no move. A node whose side to move has
/// no legal move returns the untouched sentinel (`NEG_INFINITY` when
/// maximizing, `POS_INFINITY` when minimizing) and no move.
pub fn minimax(
    ctx: &mut SearchContext<'_>,
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    last_move: Option<Move>,
) -> Result<(i32, Option<Move>)> {
    ctx.nodes += 1;

    if depth == 0 || pos.is_game_over() {
        return Ok((ctx.evaluate(pos, last_move)?, None));
    }

    let moves = pos.legal_moves();
    let mut best_move = None;

    if maximizing {
        let mut best_score = NEG_INFINITY;
        for mv in moves {
            let undo = pos.make_move_undoable(mv)?;
            let child = minimax(ctx, pos, depth - 1, alpha, beta, false, Some(mv));
            pos.unmake_move(undo);
            let (score, _) = child?;

            best_score = best_score.max(score);
            alpha = alpha.max(best_score);
            if score == best_score {
                best_move = Some(mv);
            }
            if best_score > beta {
                break;
            }
        }
        Ok((best_score, best_move))
    } else {
        let mut best_score = POS_INFINITY;
        for mv in moves {
            let undo = pos.make_move_undoable(mv)?;
            let child = minimax(ctx, pos, depth - 1, alpha, beta, true, Some(mv));
            pos.unmake_move(undo);
            let (score, _) = child?;

            best_score = best_score.min(score);
            beta = beta.min(best_score);
            if score == best_score {
                best_move = Some(mv);
            }
            if best_score < alpha {
                break;
            }
        }
        Ok((best_score, best_move))
    }
}

/// Search `root` to `depth` plies for its side to move.
///
/// The root is never touched: the search runs on a private copy.
pub fn search_root(root: &Position, depth: u8, weights: &WeightTable) -> Result<SearchResult> {
    let start_time = Instant::now();
    let mut scratch = root.clone();
    let mut ctx = SearchContext::new(root, weights);

    let (score, best_move) = minimax(
        &mut ctx,
        &mut scratch,
        depth,
        NEG_INFINITY,
        POS_INFINITY,
        true,
        None,
    )?;

    let result = SearchResult {
        best_move,
        score,
        depth,
        nodes_searched: ctx.nodes(),
        time_ms: start_time.elapsed().as_millis() as u64,
    };

    log::debug!(
        "{} searched depth {}: {} nodes in {}ms, best {:?} scoring {}",
        ctx.color(),
        result.depth,
        result.nodes_searched,
        result.time_ms,
        result.best_move,
        result.score
    );

    Ok(result)
}
