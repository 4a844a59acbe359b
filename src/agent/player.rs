//! Player trait and associated types for Othello agents.
//!
//! A player is anything that can be handed a board and asked for a move:
//! a uniform-random chooser, a greedy heuristic, the minimax searcher, or a
//! human typing coordinates.
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction. Each
//! implementation has its own constructor; the registry in
//! [`crate::agent::ai::AIType`] maps names to those constructors.
//!
//! # Snapshots
//!
//! `get_move()` receives a snapshot of the game. The driver passes a deep
//! clone, never its live position, and is the only place that applies moves.
//! The side to move in the snapshot is the color the player is playing.
//!
//! # Synchronous Design
//!
//! `get_move()` is blocking and runs to completion: humans block on input,
//! searchers block until the tree is exhausted. There is no cancellation.

use crate::game_repr::{Color, GameError, Move, Position, Result};
use std::fmt;

/// Result of a finished Othello game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Black ended with more discs
    BlackWins,
    /// White ended with more discs
    WhiteWins,
    /// Equal disc counts
    Draw,
    /// An automated player returned a move the rules rejected
    Forfeit { offender: Color, error: GameError },
    /// A player stopped providing moves (closed input)
    Aborted,
}

impl GameResult {
    /// Create a GameResult from the winning color, `None` meaning a draw
    pub fn from_winner(winner: Option<Color>) -> Self {
        match winner {
            Some(Color::Black) => GameResult::BlackWins,
            Some(Color::White) => GameResult::WhiteWins,
            None => GameResult::Draw,
        }
    }

    /// The color credited with the game, if any
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::BlackWins => Some(Color::Black),
            GameResult::WhiteWins => Some(Color::White),
            GameResult::Forfeit { offender, .. } => Some(offender.opposite()),
            GameResult::Draw | GameResult::Aborted => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::BlackWins => write!(f, "Black wins!"),
            GameResult::WhiteWins => write!(f, "White wins!"),
            GameResult::Draw => write!(f, "Tie game. Nobody wins!"),
            GameResult::Forfeit { offender, error } => {
                write!(f, "{offender} forfeits ({error}), {} wins!", offender.opposite())
            }
            GameResult::Aborted => write!(f, "Game aborted"),
        }
    }
}

/// Trait for entities that can provide Othello moves.
///
/// Only `get_move()` must be implemented.
///
/// ## `get_move()`
/// - Called only when the side to move in `position` has a legal move
/// - Returns `Err(NoLegalMoves)` if called anyway; never substitutes a move
/// - The driver validates the returned move against its own position
///
/// ## `is_human()`
/// - Default: `false`
/// - Human players get another try after a rejected move; automated players
///   forfeit instead
///
/// ## `game_ended()` / `name()`
/// - Notification and display hooks with no-op / `"Player"` defaults
pub trait Player {
    /// Request the next move for the side to move in `position`.
    fn get_move(&mut self, position: &Position) -> Result<Move>;

    /// Whether a rejected move should be retried rather than forfeited.
    fn is_human(&self) -> bool {
        false
    }

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: &GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
