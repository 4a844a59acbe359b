// Positional weight table for Othello
// Corners are worth the most, the cells touching a corner are the worst
// (they hand the corner to the opponent), edges and the center are mildly positive.
// Indexed by absolute (row, col); the table does not stretch to other board shapes.

use crate::game_repr::{GameError, Result};

#[rustfmt::skip]
pub const STANDARD_WEIGHTS: [[i32; 8]; 8] = [
    [100, -20,  10,   5,   5,  10, -20, 100],
    [-20, -50,  -2,  -2,  -2,  -2, -50, -20],
    [ 10,  -2,   5,   1,   1,   5,  -2,  10],
    [  5,  -2,   1,   2,   2,   1,  -2,   5],
    [  5,  -2,   1,   2,   2,   1,  -2,   5],
    [ 10,  -2,   5,   1,   1,   5,  -2,  10],
    [-20, -50,  -2,  -2,  -2,  -2, -50, -20],
    [100, -20,  10,   5,   5,  10, -20, 100],
];

/// A fixed-shape grid of cell weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    rows: usize,
    cols: usize,
    weights: Vec<i32>,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            weights: STANDARD_WEIGHTS.iter().flatten().copied().collect(),
        }
    }
}

impl WeightTable {
    /// Build a table from equally sized rows.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || cols == 0 || rows.iter().any(|r| r.len() != cols) {
            return Err(GameError::InvalidLayout(
                "weight rows must be non-empty and equally sized".to_string(),
            ));
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            weights: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Weight at `(row, col)`; outside the table is an `IndexOutOfRange` error,
    /// never a clamped or wrapped lookup.
    pub fn get(&self, row: usize, col: usize) -> Result<i32> {
        if row >= self.rows || col >= self.cols {
            return Err(GameError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.weights[row * self.cols + col])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_symmetric() {
        for r in 0..8 {
            for c in 0..8 {
                let w = STANDARD_WEIGHTS[r][c];
                assert_eq!(w, STANDARD_WEIGHTS[7 - r][c]);
                assert_eq!(w, STANDARD_WEIGHTS[r][7 - c]);
                assert_eq!(w, STANDARD_WEIGHTS[c][r]);
            }
        }
    }

    #[test]
    fn test_corners_dominate() {
        let table = WeightTable::default();
        let corner = table.get(0, 0).unwrap();
        for r in 0..8 {
            for c in 0..8 {
                assert!(table.get(r, c).unwrap() <= corner);
            }
        }
        assert!(table.get(1, 1).unwrap() < 0);
        assert!(table.get(0, 1).unwrap() < 0);
    }

    #[test]
    fn test_out_of_range_lookup() {
        let table = WeightTable::default();
        assert_eq!(
            table.get(8, 0),
            Err(GameError::IndexOutOfRange { row: 8, col: 0, rows: 8, cols: 8 })
        );
        assert!(table.get(0, 8).is_err());
    }

    #[test]
    fn test_from_rows() {
        let table = WeightTable::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!((table.rows(), table.cols()), (2, 2));
        assert_eq!(table.get(1, 0).unwrap(), 3);

        assert!(WeightTable::from_rows(&[vec![1, 2], vec![3]]).is_err());
        assert!(WeightTable::from_rows(&[]).is_err());
    }
}
