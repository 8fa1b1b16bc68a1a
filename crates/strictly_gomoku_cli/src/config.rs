//! Match configuration loaded from TOML and overridden from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_gomoku::{
    Game, GameError, Minimax, Opening, Strategy, StrategyOptions, StrategyRegistry,
};
use tracing::{debug, info, instrument};

/// Settings for one match.
///
/// Every key is optional in the TOML file; missing keys fall back to a
/// 22x35 board, five in a row, two human players and the centre opening.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board rows.
    #[serde(default = "default_rows")]
    rows: usize,

    /// Board columns.
    #[serde(default = "default_cols")]
    cols: usize,

    /// Marks in a row needed to win.
    #[serde(default = "default_win_length")]
    win_length: usize,

    /// Strategy playing Cross; `None` for a human.
    #[serde(default)]
    cross: Option<String>,

    /// Strategy playing Circle; `None` for a human.
    #[serde(default)]
    circle: Option<String>,

    /// Seed for random strategies.
    #[serde(default)]
    seed: Option<u64>,

    /// Opening used by minimax when it moves first.
    #[serde(default = "default_opening")]
    opening: Opening,

    /// Stop a watched match after this many moves.
    #[serde(default)]
    max_moves: Option<usize>,
}

fn default_rows() -> usize {
    22
}

fn default_cols() -> usize {
    35
}

fn default_win_length() -> usize {
    strictly_gomoku::DEFAULT_WIN_LENGTH
}

fn default_opening() -> Opening {
    Opening::Centre
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            win_length: default_win_length(),
            cross: None,
            circle: None,
            seed: None,
            opening: default_opening(),
            max_moves: None,
        }
    }
}

/// Command-line values that replace config file entries when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOverrides {
    /// Board rows.
    pub rows: Option<usize>,
    /// Board columns.
    pub cols: Option<usize>,
    /// Win length.
    pub win_length: Option<usize>,
    /// Cross strategy.
    pub cross: Option<String>,
    /// Circle strategy.
    pub circle: Option<String>,
    /// Random seed.
    pub seed: Option<u64>,
    /// Minimax opening.
    pub opening: Option<Opening>,
    /// Move limit.
    pub max_moves: Option<usize>,
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(rows = config.rows, cols = config.cols, "Match config loaded");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise starts from the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn merge(mut self, overrides: MatchOverrides) -> Result<Self, ConfigError> {
        if let Some(rows) = overrides.rows {
            self.rows = rows;
        }
        if let Some(cols) = overrides.cols {
            self.cols = cols;
        }
        if let Some(win_length) = overrides.win_length {
            self.win_length = win_length;
        }
        if overrides.cross.is_some() {
            self.cross = overrides.cross;
        }
        if overrides.circle.is_some() {
            self.circle = overrides.circle;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if let Some(opening) = overrides.opening {
            self.opening = opening;
        }
        if overrides.max_moves.is_some() {
            self.max_moves = overrides.max_moves;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that the dimensions describe a playable board and that a
    /// Minimax Cross player opens on it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::new(format!(
                "Board must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.win_length == 0 {
            return Err(ConfigError::new("Win length must be at least 1".to_string()));
        }
        if self.opening == Opening::BelowBoard && self.cross.as_deref() == Some(Minimax::NAME) {
            return Err(ConfigError::new(format!(
                "Opening {} plays row {} of a {}-row board; use centre when Minimax plays Cross",
                self.opening, self.rows, self.rows
            )));
        }
        Ok(())
    }

    /// Fills in computer players for sides the config leaves to humans.
    pub fn with_default_players(mut self, cross: &str, circle: &str) -> Result<Self, ConfigError> {
        if self.cross.is_none() {
            self.cross = Some(cross.to_string());
        }
        if self.circle.is_none() {
            self.circle = Some(circle.to_string());
        }
        self.validate()?;
        Ok(self)
    }

    /// Creates the starting game.
    pub fn new_game(&self) -> Result<Game, GameError> {
        Game::new(self.rows, self.cols, self.win_length)
    }

    /// Options handed to the strategy for `side`.
    ///
    /// Circle gets the seed plus one so two seeded random players differ.
    pub fn strategy_options(&self, circle: bool) -> StrategyOptions {
        StrategyOptions {
            seed: self.seed.map(|s| if circle { s.wrapping_add(1) } else { s }),
            opening: self.opening,
        }
    }

    /// Builds the configured computer players, `(cross, circle)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownStrategy`] for a name the registry lacks.
    #[instrument(skip(self, registry))]
    pub fn build_players(
        &self,
        registry: &StrategyRegistry,
    ) -> Result<(Option<Box<dyn Strategy>>, Option<Box<dyn Strategy>>), GameError> {
        let cross = self
            .cross
            .as_deref()
            .map(|name| registry.create(name, &self.strategy_options(false)))
            .transpose()?;
        let circle = self
            .circle
            .as_deref()
            .map(|name| registry.create(name, &self.strategy_options(true)))
            .transpose()?;
        Ok((cross, circle))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
