use super::{GameError, Result};
use std::fmt;

/// A `(row, col)` placement. Only meaningful against a specific position,
/// and only while that cell is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Move {
        Self { row, col }
    }

    /// Parse a move typed as `"row col"` or `"row,col"`.
    ///
    /// Tokens that are not integers fail with `InvalidType`. Negative
    /// integers are well-typed but can never land on the board, so they
    /// fail with `InvalidMove`.
    pub fn parse(input: &str) -> Result<Move> {
        let tokens: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.len() != 2 {
            return Err(GameError::InvalidType(input.trim().to_string()));
        }

        let parse_coord = |token: &str| {
            token
                .parse::<i64>()
                .map_err(|_| GameError::InvalidType(token.to_string()))
        };
        let row = parse_coord(tokens[0])?;
        let col = parse_coord(tokens[1])?;

        if row < 0 || col < 0 {
            return Err(GameError::InvalidMove { row, col });
        }
        Ok(Move::new(row as usize, col as usize))
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Move::new(row, col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
