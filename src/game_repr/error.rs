//! Error taxonomy shared by the rules, the agents and the driver.

use super::Color;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Target cell is occupied, off the board, or captures in no direction.
    #[error("invalid move at row {row}, col {col}")]
    InvalidMove { row: i64, col: i64 },

    /// A coordinate could not be read as an integer.
    #[error("invalid coordinate type: {0:?}")]
    InvalidType(String),

    /// A weight table was indexed outside of its fixed shape.
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} weight table")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid board dimensions {rows}x{cols} (need even sizes between 4 and 18)")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A player name is unknown, or the player cannot be used where asked.
    #[error("invalid player: {0}")]
    InvalidPlayer(String),

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    /// An agent was asked for a move while its color has none.
    #[error("{0} has no legal move")]
    NoLegalMoves(Color),

    #[error("move input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, GameError>;
