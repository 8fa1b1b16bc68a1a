//! Strictly Gomoku CLI - terminal front end for the gomoku engine
//!
//! # Architecture
//!
//! - **Config**: [`MatchConfig`] loaded from TOML, overridden by flags
//! - **Session**: [`Session`] pairs a game with its computer players
//! - **Render**: plain-text boards with indices and highlighted wins
//! - **Commands**: `strategies`, `watch` and `play` runners
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::StrategyRegistry;
//! use strictly_gomoku_cli::{MatchConfig, WatchOutput, watch};
//!
//! let config = MatchConfig::from_toml(
//!     "rows = 9\ncols = 9\ncross = \"RandomAi\"\ncircle = \"RandomAi\"\nseed = 3",
//! )?;
//! let mut out = Vec::new();
//! let summary = watch(
//!     config,
//!     &StrategyRegistry::with_defaults(),
//!     WatchOutput { quiet: true, json: false },
//!     &mut out,
//! )?;
//! assert!(summary.moves > 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod commands;
mod config;
mod render;
mod session;

pub mod cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig, MatchOverrides};

// Crate-level exports - Sessions
pub use session::{GameType, MatchSummary, Played, Session, SessionError};

// Crate-level exports - Rendering
pub use render::{WIN_MARKER, render_board, status_line};

// Crate-level exports - Commands
pub use commands::{CommandError, WatchOutput, list_strategies, parse_move, play, watch};
