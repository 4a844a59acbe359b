//! Greedy one-ply player scored with the positional table.

use super::evaluation::positional;
use super::weights::WeightTable;
use crate::agent::player::Player;
use crate::game_repr::{GameError, Move, Position, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Probability of deliberately playing the worst-ranked move
pub const DEFAULT_FEINT: f64 = 0.05;

/// Plays the move whose resulting board scores best on the weight table.
///
/// Now and then it feints and plays the worst-ranked move instead, so two
/// heuristic players do not repeat the same game forever.
pub struct HeuristicPlayer {
    weights: WeightTable,
    feint: f64,
    rng: StdRng,
    name: String,
}

impl HeuristicPlayer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            weights: WeightTable::default(),
            feint: DEFAULT_FEINT,
            rng,
            name: "Heuristic".to_string(),
        }
    }

    /// Set the feint probability, clamped to `[0, 1]`.
    pub fn with_feint(mut self, feint: f64) -> Self {
        self.feint = feint.clamp(0.0, 1.0);
        self
    }

    pub fn with_weights(mut self, weights: WeightTable) -> Self {
        self.weights = weights;
        self
    }

    pub fn feint(&self) -> f64 {
        self.feint
    }

    /// Positional score of each legal move's resulting board, for the mover.
    pub fn rank_moves(&self, position: &Position) -> Result<Vec<(Move, i32)>> {
        let me = position.turn();
        position
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let preview = position.preview_move(mv)?;
                Ok((mv, positional(&preview, me, &self.weights)?))
            })
            .collect()
    }
}

impl Player for HeuristicPlayer {
    fn get_move(&mut self, position: &Position) -> Result<Move> {
        let ranked = self.rank_moves(position)?;
        let no_move = GameError::NoLegalMoves(position.turn());

        let feinting = self.rng.gen::<f64>() < self.feint;
        let mut chosen: Option<(Move, i32)> = None;
        for (mv, score) in ranked {
            let replace = match chosen {
                None => true,
                // last of the worst / first of the best
                Some((_, current)) if feinting => score <= current,
                Some((_, current)) => score > current,
            };
            if replace {
                chosen = Some((mv, score));
            }
        }

        if feinting {
            log::debug!("{} feints", self.name);
        }
        chosen.map(|(mv, _)| mv).ok_or(no_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
