//! Strictly Gomoku - (m,n,k) game logic and computer opponents
//!
//! An m×n board on which a player wins by placing k marks in a row, column
//! or diagonal.
//!
//! # Architecture
//!
//! - **Board**: immutable grid of [`Field`]s, copied on write
//! - **Game**: immutable state machine; [`Game::make_move`] returns the next state
//! - **Rules**: win and draw detection over arbitrary board sizes
//! - **AI**: the [`Strategy`] trait with [`RandomAi`] and [`Minimax`]
//! - **Registry**: names → strategy factories for front ends
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{Field, Game, Minimax, Strategy};
//!
//! # fn example() -> Result<(), strictly_gomoku::GameError> {
//! let game = Game::new(15, 15, 5)?;
//! let game = game.make_move(7, 7)?;
//! assert_eq!(game.player_on_move(), Field::Circle);
//!
//! let reply = Minimax::new().next_move(&game)?;
//! let game = game.play(reply)?;
//! assert_eq!(game.player_on_move(), Field::Cross);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod board;
mod error;
mod game;
mod registry;
mod types;

pub mod lines;
pub mod rules;

// Crate-level exports - Core types
pub use board::Board;
pub use error::GameError;
pub use types::{Coordinate, Field};

// Crate-level exports - Game state
pub use game::{DEFAULT_WIN_LENGTH, Game};
pub use rules::WinningLine;

// Crate-level exports - Computer opponents
pub use ai::{Minimax, Opening, RandomAi, SEARCH_DEPTH, Strategy, frontier, longest_run_count};

// Crate-level exports - Strategy registry
pub use registry::{StrategyFactory, StrategyOptions, StrategyRegistry};
