//! Line scans: runs of `k` cells along rows, columns and diagonals.
//!
//! None of the scans check bounds. Callers stay inside the board by only
//! walking runs from [`anchors`], which keeps every run on the board.

use crate::{Board, Coordinate, Field};

/// Direction of a run, in the order win detection tests them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Direction {
    /// Rightward along a row.
    Row,
    /// Downward along a column.
    Column,
    /// Down-right, starting at the anchor.
    DiagonalRight,
    /// Down-left, starting `k - 1` columns right of the anchor.
    DiagonalLeft,
}

impl Direction {
    /// First cell of this direction's run for anchor `(i, j)`.
    pub fn start(self, i: usize, j: usize, k: usize) -> (usize, usize) {
        match self {
            Direction::DiagonalLeft => (i, j + k.saturating_sub(1)),
            _ => (i, j),
        }
    }

    /// `(row, col)` step between consecutive cells.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Row => (0, 1),
            Direction::Column => (1, 0),
            Direction::DiagonalRight => (1, 1),
            Direction::DiagonalLeft => (1, -1),
        }
    }
}

/// Every anchor `(i, j)` with `i <= rows - k` and `j <= cols - k`, row-major.
///
/// Empty when `k` is zero or larger than either dimension.
pub fn anchors(rows: usize, cols: usize, k: usize) -> impl Iterator<Item = (usize, usize)> {
    let (last_i, last_j) = match (rows.checked_sub(k), cols.checked_sub(k)) {
        (Some(i), Some(j)) if k > 0 => (Some(i), j),
        _ => (None, 0),
    };
    last_i
        .into_iter()
        .flat_map(move |last_i| (0..=last_i).flat_map(move |i| (0..=last_j).map(move |j| (i, j))))
}

fn walk(start: (usize, usize), step: (isize, isize), k: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..k as isize).map(move |n| {
        (
            start.0.wrapping_add_signed(step.0 * n),
            start.1.wrapping_add_signed(step.1 * n),
        )
    })
}

fn fields_along(board: &Board, start: (usize, usize), step: (isize, isize), k: usize) -> Vec<Field> {
    walk(start, step, k)
        .map(|(row, col)| board.field_at(row, col))
        .collect()
}

fn coordinates_along(start: (usize, usize), step: (isize, isize), k: usize) -> Vec<Coordinate> {
    walk(start, step, k)
        .map(|(row, col)| Coordinate::new(row as i32, col as i32))
        .collect()
}

/// `k` fields rightward from `(i, j)`.
pub fn row(board: &Board, i: usize, j: usize, k: usize) -> Vec<Field> {
    fields_along(board, (i, j), Direction::Row.step(), k)
}

/// `k` fields downward from `(i, j)`.
pub fn column(board: &Board, i: usize, j: usize, k: usize) -> Vec<Field> {
    fields_along(board, (i, j), Direction::Column.step(), k)
}

/// `k` fields down-right from `(i, j)`.
pub fn diagonal_right(board: &Board, i: usize, j: usize, k: usize) -> Vec<Field> {
    fields_along(board, (i, j), Direction::DiagonalRight.step(), k)
}

/// `k` fields down-left from `(i, j)`; `(i, j)` is the top-right end.
pub fn diagonal_left(board: &Board, i: usize, j: usize, k: usize) -> Vec<Field> {
    fields_along(board, (i, j), Direction::DiagonalLeft.step(), k)
}

/// Lazily yields the fields of the run in `direction` for anchor `(i, j)`.
pub fn run_iter(
    board: &Board,
    direction: Direction,
    i: usize,
    j: usize,
    k: usize,
) -> impl Iterator<Item = Field> + '_ {
    walk(direction.start(i, j, k), direction.step(), k).map(|(row, col)| board.field_at(row, col))
}

/// Fields of the run in `direction` for anchor `(i, j)`.
pub fn run_fields(board: &Board, direction: Direction, i: usize, j: usize, k: usize) -> Vec<Field> {
    fields_along(board, direction.start(i, j, k), direction.step(), k)
}

/// Coordinates of the run in `direction` for anchor `(i, j)`.
pub fn run_coordinates(direction: Direction, i: usize, j: usize, k: usize) -> Vec<Coordinate> {
    coordinates_along(direction.start(i, j, k), direction.step(), k)
}
