//! Computer opponents.
//!
//! Every opponent implements [`Strategy`]: given read-only access to a
//! [`Game`], it names the next coordinate to play. Strategies never modify
//! the game they are shown.

mod eval;
mod minimax;
mod random;

pub use eval::longest_run_count;
pub use minimax::{Minimax, Opening, SEARCH_DEPTH, frontier};
pub use random::RandomAi;

use crate::{Coordinate, Game, GameError};

/// Trait for computer players that can choose moves.
pub trait Strategy: Send {
    /// Chooses the next coordinate for the player on move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMoves`] when the strategy has nothing it
    /// can play.
    fn next_move(&mut self, game: &Game) -> Result<Coordinate, GameError>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}
