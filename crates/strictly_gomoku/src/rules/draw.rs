//! Draw detection for (m,n,k) gomoku.

use super::win::find_winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
#[instrument(skip(board), fields(rows = board.rows(), cols = board.cols()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board on which nobody completed a run of `k`.
#[instrument(skip(board), fields(rows = board.rows(), cols = board.cols()))]
pub fn is_draw(board: &Board, k: usize) -> bool {
    is_full(board) && find_winner(board, k).is_none()
}
