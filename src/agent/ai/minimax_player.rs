//! MinimaxPlayer - Othello AI using depth-limited minimax with alpha-beta pruning
//!
//! The player itself only carries configuration (depth and weights). Each
//! `get_move` call builds its own search context from the board it is handed,
//! so one instance can be reused across games.
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 1
//! - **Medium**: Depth 3
//! - **Hard**: Depth 5 (the standard horizon)
//! - **Expert**: Depth 7
//!
//! # Examples
//!
//! ```
//! use othello_engine::agent::ai::{Difficulty, MinimaxPlayer};
//! use othello_engine::agent::player::Player;
//! use othello_engine::game_repr::Position;
//!
//! let mut ai = MinimaxPlayer::with_difficulty(Difficulty::Easy);
//! let mv = ai.get_move(&Position::default()).unwrap();
//! assert!(Position::default().legal_moves().contains(&mv));
//! ```

use super::minimax::{search_root, DEFAULT_DEPTH};
use super::weights::WeightTable;
use crate::agent::player::Player;
use crate::game_repr::{GameError, Move, Position, Result};

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Depth 1: greedy on disc gain plus the placed cell's weight
    Easy,
    /// Depth 3
    Medium,
    /// Depth 5
    #[default]
    Hard,
    /// Depth 7, noticeably slower on open boards
    Expert,
}

impl Difficulty {
    /// Number of plies to search
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => DEFAULT_DEPTH,
            Difficulty::Expert => 7,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_name(name: &str) -> Option<Difficulty> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }
}

/// AI Player that searches with minimax and alpha-beta pruning
///
/// Deterministic: the same position always yields the same move.
pub struct MinimaxPlayer {
    /// Plies searched from the root
    depth: u8,

    /// Weights for the move bonus at the leaves
    weights: WeightTable,

    /// Display name for this AI player
    name: String,
}

impl MinimaxPlayer {
    pub fn new(depth: u8, weights: WeightTable, name: String) -> Self {
        Self {
            depth,
            weights,
            name,
        }
    }

    /// Standard weights, depth from `difficulty`, name "AI ({difficulty})"
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(difficulty.max_depth(), WeightTable::default(), name)
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::with_difficulty(Difficulty::default())
    }
}

impl Player for MinimaxPlayer {
    /// Search the snapshot for its side to move and return the chosen move.
    ///
    /// A root without legal moves is a caller error and comes back as
    /// `NoLegalMoves`; errors raised inside the search are passed through.
    fn get_move(&mut self, position: &Position) -> Result<Move> {
        let color = position.turn();
        if !position.can_move(color) {
            return Err(GameError::NoLegalMoves(color));
        }

        let search_result = search_root(position, self.depth, &self.weights)?;
        search_result.best_move.ok_or(GameError::NoLegalMoves(color))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
