//! Leaf evaluation for the minimax search.

use crate::lines::{self, Direction};
use crate::{Board, Field};
use strum::IntoEnumIterator;

/// Largest number of `target` marks inside any run of `k` cells.
///
/// Walks the same anchors and directions as win detection but counts
/// matching cells instead of requiring the whole run to match. Empty cells
/// and the opponent's marks simply do not count.
pub fn longest_run_count(board: &Board, k: usize, target: Field) -> usize {
    let mut best = 0;
    for (i, j) in lines::anchors(board.rows(), board.cols(), k) {
        for direction in Direction::iter() {
            let count = lines::run_iter(board, direction, i, j, k)
                .filter(|f| *f == target)
                .count();
            best = best.max(count);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(longest_run_count(&Board::new(6, 6), 5, Field::Cross), 0);
    }

    #[test]
    fn test_counts_scattered_marks_in_one_window() {
        // X . X . X along a row: three marks inside one window of five.
        let board = Board::new(6, 6)
            .set(1, 0, Field::Cross)
            .unwrap()
            .set(1, 2, Field::Cross)
            .unwrap()
            .set(1, 4, Field::Cross)
            .unwrap();
        assert_eq!(longest_run_count(&board, 5, Field::Cross), 3);
        assert_eq!(longest_run_count(&board, 5, Field::Circle), 0);
    }

    #[test]
    fn test_keeps_maximum_across_anchors() {
        // Two crosses early in scan order, one later: the early pair wins.
        let board = Board::new(6, 6)
            .set(0, 0, Field::Cross)
            .unwrap()
            .set(1, 1, Field::Cross)
            .unwrap()
            .set(5, 5, Field::Circle)
            .unwrap();
        assert_eq!(longest_run_count(&board, 5, Field::Cross), 2);
    }
}
