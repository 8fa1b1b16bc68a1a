//! Error type for the gomoku engine.

/// Errors raised by the board, the game and the AI strategies.
///
/// Illegal moves are not errors: [`Game::make_move`](crate::Game::make_move)
/// returns the unchanged game instead.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A coordinate lies outside the board.
    #[display("Coordinate ({x}, {y}) is outside the {rows}x{cols} board")]
    OutOfRange {
        /// Requested row.
        x: i32,
        /// Requested column.
        y: i32,
        /// Board rows.
        rows: usize,
        /// Board columns.
        cols: usize,
    },

    /// Board or win length cannot describe a playable game.
    #[display("Invalid dimensions: {rows}x{cols} board with win length {win_length}")]
    InvalidDimensions {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
        /// Requested win length.
        win_length: usize,
    },

    /// A strategy found nothing it could play.
    #[display("No legal moves available")]
    NoLegalMoves,

    /// No strategy is registered under this name.
    #[display("Unknown strategy: {}", _0)]
    UnknownStrategy(String),
}

impl std::error::Error for GameError {}
