//! Othello rules engine with configurable board sizes and automated players.
//!
//! - [`game_repr`]: board state, move generation and move application
//! - [`agent`]: the `Player` trait, the minimax searcher and the simpler agents
//! - [`orchestrator`]: headless game driver and parallel series runner

pub mod agent;
pub mod game_repr;
pub mod orchestrator;

pub use agent::{AIConfig, AIType, Difficulty, Player};
pub use game_repr::{Cell, Color, GameError, Move, Position, Result};
pub use orchestrator::{play_series, GameConfig, GameResult, GameSummary, Orchestrator, SeriesStats};
