//! Game rules for (m,n,k) gomoku.
//!
//! This module contains pure functions for evaluating a board according
//! to the k-in-a-row rules. Rules are kept apart from board storage so the
//! game state and the search heuristics can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningLine, find_winner};
