pub mod player;
pub use player::*;

pub mod human_player;
pub use human_player::HumanPlayer;

pub mod random_player;
pub use random_player::RandomPlayer;

pub mod ai;
pub use ai::{AIConfig, AIType, Difficulty, HeuristicPlayer, MinimaxPlayer};
