// Othello agents built on position evaluation
//
// - evaluation: positional, differential and mobility scoring
// - minimax: depth-limited minimax with alpha-beta pruning
// - heuristic_player / minimax_player: the automated players
// - ai_type: name -> constructor registry used by the driver and the CLI
//
// Search is deterministic: the same position always gives the same move.

pub mod ai_type;
pub mod evaluation;
mod heuristic_player;
pub mod minimax;
mod minimax_player;
pub mod weights;

#[cfg(test)]
mod tests;

pub use ai_type::{AIConfig, AIType};
pub use heuristic_player::{HeuristicPlayer, DEFAULT_FEINT};
pub use minimax::{search_root, SearchResult};
pub use minimax_player::{Difficulty, MinimaxPlayer};
pub use weights::WeightTable;
