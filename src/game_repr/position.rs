use super::rules::{self, MoveList};
use super::{Cell, Color, GameError, Move, Result};
use smallvec::SmallVec;
use std::fmt;

pub const MIN_DIMENSION: usize = 4;
pub const MAX_DIMENSION: usize = 18;

/// Board state: a `rows` x `cols` grid, the side to move and a cached
/// `(black, white)` disc count that is refreshed after every applied move.
///
/// `Clone` is a deep copy; a clone never shares cells with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    turn: Color,
    scores: (u32, u32),
}

/// Everything needed to take back one applied move.
#[derive(Debug, Clone)]
pub struct UndoInfo {
    pub mv: Move,
    pub flipped: SmallVec<[usize; 16]>,
    turn: Color,
    scores: (u32, u32),
}

impl Default for Position {
    fn default() -> Self {
        Self::with_start_layout(8, 8, Color::Black)
    }
}

impl Position {
    /// Create a board with the 2x2 starting cross in the center.
    ///
    /// The cross is always White, Black / Black, White (top-left quadrant
    /// first); `first_turn` only picks who moves first.
    pub fn new(rows: usize, cols: usize, first_turn: Color) -> Result<Position> {
        validate_dimensions(rows, cols)?;
        Ok(Self::with_start_layout(rows, cols, first_turn))
    }

    fn with_start_layout(rows: usize, cols: usize, first_turn: Color) -> Position {
        let mut pos = Position {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            turn: first_turn,
            scores: (0, 0),
        };

        let (r, c) = (rows / 2, cols / 2);
        pos.set_cell(r - 1, c - 1, Cell::White);
        pos.set_cell(r - 1, c, Cell::Black);
        pos.set_cell(r, c - 1, Cell::Black);
        pos.set_cell(r, c, Cell::White);
        pos.scores = pos.compute_scores();
        pos
    }

    /// Build a position from text rows using `.`, `B` and `W`.
    /// Whitespace inside a row is ignored.
    pub fn from_layout(layout: &[&str], turn: Color) -> Result<Position> {
        let rows = layout.len();
        let mut cells = Vec::new();
        let mut cols = None;

        for (r, line) in layout.iter().enumerate() {
            let mut width = 0;
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let cell = Cell::from_char(ch).ok_or_else(|| {
                    GameError::InvalidLayout(format!("unexpected {ch:?} in row {r}"))
                })?;
                cells.push(cell);
                width += 1;
            }
            match cols {
                None => cols = Some(width),
                Some(w) if w != width => {
                    return Err(GameError::InvalidLayout(format!(
                        "row {r} has {width} cells, expected {w}"
                    )));
                }
                Some(_) => {}
            }
        }

        let cols = cols.unwrap_or(0);
        validate_dimensions(rows, cols)?;

        let mut pos = Position {
            rows,
            cols,
            cells,
            turn,
            scores: (0, 0),
        };
        pos.scores = pos.compute_scores();
        Ok(pos)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Cached `(black, white)` disc counts.
    pub fn scores(&self) -> (u32, u32) {
        self.scores
    }

    pub fn score(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.scores.0,
            Color::White => self.scores.1,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell at `(row, col)`, `None` when off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Hand the turn to the other color regardless of whether it can move.
    /// Callers that only want to peek must switch back afterwards.
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Fresh `(black, white)` tally of the grid.
    pub fn compute_scores(&self) -> (u32, u32) {
        self.cells.iter().fold((0, 0), |(b, w), cell| match cell {
            Cell::Black => (b + 1, w),
            Cell::White => (b, w + 1),
            Cell::Empty => (b, w),
        })
    }

    /// Color with more discs, `None` on a tie. Only meaningful once the game is over.
    pub fn winner(&self) -> Option<Color> {
        let (black, white) = self.scores;
        if black > white {
            Some(Color::Black)
        } else if white > black {
            Some(Color::White)
        } else {
            None
        }
    }

    pub fn legal_moves(&self) -> MoveList {
        rules::legal_moves(self)
    }

    pub fn can_move(&self, color: Color) -> bool {
        rules::can_move(self, color)
    }

    pub fn is_game_over(&self) -> bool {
        rules::is_game_over(self)
    }

    /// Play `(row, col)` for the side to move.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<()> {
        self.make_move_undoable(Move::new(row, col)).map(|_| ())
    }

    /// Play a move and return what is needed to take it back.
    ///
    /// Validation happens before any cell is touched, so a rejected move
    /// leaves the position unchanged. After the move the turn passes to the
    /// opponent only if the opponent has a legal reply.
    pub fn make_move_undoable(&mut self, mv: Move) -> Result<UndoInfo> {
        let invalid = GameError::InvalidMove {
            row: i64::try_from(mv.row).unwrap_or(i64::MAX),
            col: i64::try_from(mv.col).unwrap_or(i64::MAX),
        };
        match self.cell(mv.row, mv.col) {
            Some(Cell::Empty) => {}
            _ => return Err(invalid),
        }

        let mover = self.turn;
        let directions = rules::capturing_directions(self, mv.row, mv.col, mover);
        if directions.is_empty() {
            return Err(invalid);
        }

        let mut undo = UndoInfo {
            mv,
            flipped: SmallVec::new(),
            turn: self.turn,
            scores: self.scores,
        };

        let own = mover.to_cell();
        for (dr, dc) in directions {
            let mut r = mv.row as i64 + dr;
            let mut c = mv.col as i64 + dc;
            loop {
                let idx = self.index(r as usize, c as usize);
                if self.cells[idx] == own {
                    break;
                }
                self.cells[idx] = own;
                undo.flipped.push(idx);
                r += dr;
                c += dc;
            }
        }
        self.set_cell(mv.row, mv.col, own);

        if rules::can_move(self, mover.opposite()) {
            self.turn = mover.opposite();
        }
        self.scores = self.compute_scores();

        Ok(undo)
    }

    /// Take back a move returned by `make_move_undoable`.
    pub fn unmake_move(&mut self, undo: UndoInfo) {
        for &idx in &undo.flipped {
            self.cells[idx] = self.cells[idx].flipped();
        }
        self.set_cell(undo.mv.row, undo.mv.col, Cell::Empty);
        self.turn = undo.turn;
        self.scores = undo.scores;
    }

    /// The position that `mv` would produce, leaving `self` untouched.
    pub fn preview_move(&self, mv: Move) -> Result<Position> {
        let mut next = self.clone();
        next.make_move_undoable(mv)?;
        Ok(next)
    }
}

fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    let ok = |n: usize| n % 2 == 0 && (MIN_DIMENSION..=MAX_DIMENSION).contains(&n);
    if ok(rows) && ok(cols) {
        Ok(())
    } else {
        Err(GameError::InvalidDimensions { rows, cols })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
