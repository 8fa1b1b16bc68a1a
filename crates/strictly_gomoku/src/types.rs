//! Core domain types for gomoku.

use serde::{Deserialize, Serialize};

/// Value of a single cell on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Field {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Mark of the first player.
    Cross,
    /// Mark of the second player.
    Circle,
}

impl Field {
    /// Returns the other player's mark.
    ///
    /// `Empty` has no opponent and maps to itself.
    pub fn toggle(self) -> Self {
        match self {
            Field::Cross => Field::Circle,
            Field::Circle => Field::Cross,
            Field::Empty => Field::Empty,
        }
    }

    /// Returns `true` for [`Field::Empty`].
    pub fn is_empty(self) -> bool {
        self == Field::Empty
    }

    /// Single-character symbol used by text renderers.
    pub fn symbol(self) -> char {
        match self {
            Field::Empty => '.',
            Field::Cross => 'X',
            Field::Circle => 'O',
        }
    }
}

/// A `(row, col)` position.
///
/// Negative components mark the sentinel "no move recorded".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl Coordinate {
    /// Sentinel stored in a fresh game's move window.
    pub const SENTINEL: Coordinate = Coordinate { row: -2, col: -2 };

    /// Creates a coordinate.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns `true` if this is a sentinel rather than a board position.
    pub fn is_sentinel(self) -> bool {
        self.row < 0 || self.col < 0
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::SENTINEL
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
