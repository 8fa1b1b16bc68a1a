//! Immutable `rows x cols` gomoku board.

use crate::{Coordinate, Field, GameError};
use serde::Serialize;
use tracing::instrument;

/// Immutable grid of [`Field`]s.
///
/// Mutation goes through [`Board::set`], which returns a fresh copy and
/// leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Cells in row-major order.
    cells: Vec<Field>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Field::Empty; rows * cols],
        }
    }

    /// Builds a board from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimensions`] if there are no rows, the
    /// first row is empty, or the rows differ in length.
    #[instrument(skip(rows))]
    pub fn from_rows(rows: Vec<Vec<Field>>) -> Result<Self, GameError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(GameError::InvalidDimensions {
                rows: height,
                cols: width,
                win_length: 0,
            });
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `(x, y)` lies on the board.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        usize::try_from(x).is_ok_and(|x| x < self.rows)
            && usize::try_from(y).is_ok_and(|y| y < self.cols)
    }

    /// Gets the field at row `x`, column `y`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `(x, y)` is not on the board.
    pub fn get(&self, x: i32, y: i32) -> Result<Field, GameError> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Returns a copy of the board with `(x, y)` set to `field`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `(x, y)` is not on the board.
    pub fn set(&self, x: i32, y: i32, field: Field) -> Result<Board, GameError> {
        let idx = self.index(x, y)?;
        let mut next = self.clone();
        next.cells[idx] = field;
        Ok(next)
    }

    /// On-board cells of the 8-neighbourhood around `(x, y)`.
    ///
    /// Emitted row-major: rows `x-1..=x+1`, columns `y-1..=y+1` within each
    /// row, skipping the centre. The centre itself need not be on the board.
    pub fn neighbors(&self, x: i32, y: i32) -> Vec<Coordinate> {
        let mut around = Vec::with_capacity(8);
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x.saturating_add(dx), y.saturating_add(dy));
                if self.contains(nx, ny) {
                    around.push(Coordinate::new(nx, ny));
                }
            }
        }
        around
    }

    /// Fields of [`Board::neighbors`], in the same order.
    pub fn neighbor_fields(&self, x: i32, y: i32) -> Vec<Field> {
        self.neighbors(x, y)
            .into_iter()
            .map(|c| self.field_at(c.row as usize, c.col as usize))
            .collect()
    }

    /// Iterates the board one row slice at a time.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Field]> {
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Returns every row as an owned vector.
    pub fn fields(&self) -> Vec<Vec<Field>> {
        self.rows_iter().map(<[Field]>::to_vec).collect()
    }

    /// Returns `true` if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|f| !f.is_empty())
    }

    /// Number of cells holding `field`.
    pub fn count(&self, field: Field) -> usize {
        self.cells.iter().filter(|f| **f == field).count()
    }

    /// Unchecked row-major lookup; panics when out of bounds.
    pub(crate) fn field_at(&self, row: usize, col: usize) -> Field {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, GameError> {
        if !self.contains(x, y) {
            return Err(GameError::OutOfRange {
                x,
                y,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(x as usize * self.cols + y as usize)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
