//! Uniform-random player.

use crate::agent::player::Player;
use crate::game_repr::{GameError, Move, Position, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks uniformly among the legal moves.
///
/// Seeded construction makes the sequence of choices reproducible.
pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            name: "Random".to_string(),
        }
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, position: &Position) -> Result<Move> {
        let legal_moves = position.legal_moves();
        legal_moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::NoLegalMoves(position.turn()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Color;

    #[test]
    fn test_random_move_is_legal() {
        let mut player = RandomPlayer::new(Some(7));
        let mut pos = Position::default();

        while !pos.is_game_over() {
            let mv = player.get_move(&pos).unwrap();
            assert!(pos.legal_moves().contains(&mv));
            pos.apply_move(mv.row, mv.col).unwrap();
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let pos = Position::default();
        let mut a = RandomPlayer::new(Some(42));
        let mut b = RandomPlayer::new(Some(42));

        for _ in 0..10 {
            assert_eq!(a.get_move(&pos).unwrap(), b.get_move(&pos).unwrap());
        }
    }

    #[test]
    fn test_no_legal_move_is_an_error() {
        let pos = Position::from_layout(&["BBB.", "....", "....", "...."], Color::White).unwrap();
        let mut player = RandomPlayer::new(Some(1));

        assert_eq!(player.get_move(&pos), Err(GameError::NoLegalMoves(Color::White)));
    }
}
