//! Opponent that plays uniformly random empty cells.

use super::Strategy;
use crate::{Coordinate, Game, GameError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks cells by independent uniform draws until one is empty.
#[derive(Debug, Clone)]
pub struct RandomAi {
    rng: StdRng,
}

impl RandomAi {
    /// Registry name.
    pub const NAME: &'static str = "RandomAi";

    /// Creates an opponent seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible opponent.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomAi {
    #[instrument(skip(self, game), fields(player = %game.player_on_move()))]
    fn next_move(&mut self, game: &Game) -> Result<Coordinate, GameError> {
        let board = game.board();
        if board.is_full() || game.is_game_over() {
            return Err(GameError::NoLegalMoves);
        }

        let (rows, cols) = (board.rows() as i32, board.cols() as i32);
        loop {
            let x = self.rng.random_range(0..rows);
            let y = self.rng.random_range(0..cols);
            if board.get(x, y)?.is_empty() {
                debug!(x, y, "Random move chosen");
                return Ok(Coordinate::new(x, y));
            }
        }
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
