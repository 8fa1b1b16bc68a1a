//! Win detection for (m,n,k) gomoku.

use crate::lines::{self, Direction};
use crate::{Board, Coordinate, Field};
use serde::Serialize;
use strum::IntoEnumIterator;

/// A completed run of `k` identical marks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine {
    /// The mark that fills the run.
    pub field: Field,
    /// Cells of the run, in scan order.
    pub coordinates: Vec<Coordinate>,
}

/// Finds the first complete run of `k` on the board.
///
/// Anchors are visited row-major and each anchor tests row, column,
/// down-right and down-left in that order. Only the first uniform run is
/// reported, even when several lines are complete at once.
pub fn find_winner(board: &Board, k: usize) -> Option<WinningLine> {
    for (i, j) in lines::anchors(board.rows(), board.cols(), k) {
        for direction in Direction::iter() {
            let mut run = lines::run_iter(board, direction, i, j, k);
            let Some(first) = run.next() else { continue };
            if !first.is_empty() && run.all(|f| f == first) {
                return Some(WinningLine {
                    field: first,
                    coordinates: lines::run_coordinates(direction, i, j, k),
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: Board, cells: &[(i32, i32)], field: Field) -> Board {
        cells
            .iter()
            .fold(board, |b, (x, y)| b.set(*x, *y, field).unwrap())
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winner(&Board::new(10, 10), 5), None);
    }

    #[test]
    fn test_winner_row() {
        let board = place(
            Board::new(10, 10),
            &[(4, 2), (4, 3), (4, 4), (4, 5), (4, 6)],
            Field::Cross,
        );
        let line = find_winner(&board, 5).unwrap();
        assert_eq!(line.field, Field::Cross);
        assert_eq!(line.coordinates[0], Coordinate::new(4, 2));
        assert_eq!(line.coordinates[4], Coordinate::new(4, 6));
    }

    #[test]
    fn test_winner_down_left_diagonal() {
        let board = place(
            Board::new(6, 6),
            &[(1, 5), (2, 4), (3, 3), (4, 2), (5, 1)],
            Field::Circle,
        );
        let line = find_winner(&board, 5).unwrap();
        assert_eq!(line.field, Field::Circle);
        assert_eq!(
            line.coordinates,
            vec![
                Coordinate::new(1, 5),
                Coordinate::new(2, 4),
                Coordinate::new(3, 3),
                Coordinate::new(4, 2),
                Coordinate::new(5, 1)
            ]
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = place(
            Board::new(10, 10),
            &[(0, 0), (1, 1), (2, 2), (3, 3)],
            Field::Cross,
        );
        assert_eq!(find_winner(&board, 5), None);
    }

    #[test]
    fn test_win_length_longer_than_board() {
        let board = place(Board::new(3, 3), &[(0, 0), (0, 1), (0, 2)], Field::Cross);
        assert_eq!(find_winner(&board, 4), None);
        assert!(find_winner(&board, 3).is_some());
    }
}
