//! Strategy registry: maps strategy names to factories.
//!
//! Front ends use the registry to list the available opponents by name and
//! to build the one the user picked. Nothing is global: construct a
//! registry with [`StrategyRegistry::with_defaults`] and pass it to whoever
//! needs it.

use crate::ai::{Minimax, Opening, RandomAi, Strategy};
use crate::GameError;
use tracing::{debug, info, instrument, warn};

/// Construction options shared by all factories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrategyOptions {
    /// Seed for strategies that use randomness; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Opening used by [`Minimax`].
    pub opening: Opening,
}

/// Builds a boxed strategy from options.
pub type StrategyFactory = fn(&StrategyOptions) -> Box<dyn Strategy>;

/// Named collection of strategy factories, in registration order.
#[derive(Debug, Clone, Default)]
pub struct StrategyRegistry {
    entries: Vec<(&'static str, StrategyFactory)>,
}

impl StrategyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in strategies.
    #[instrument]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Minimax::NAME, make_minimax);
        registry.register(RandomAi::NAME, make_random);
        info!(count = registry.len(), "Strategy registry loaded");
        registry
    }

    /// Adds a factory under `name`, replacing any previous entry.
    #[instrument(skip(self, factory))]
    pub fn register(&mut self, name: &'static str, factory: StrategyFactory) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            warn!(name, "Replacing registered strategy");
            entry.1 = factory;
        } else {
            debug!(name, "Registering strategy");
            self.entries.push((name, factory));
        }
    }

    /// Names of all registered strategies, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    /// Returns `true` if a strategy is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    /// Builds the strategy registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownStrategy`] if no such strategy exists.
    #[instrument(skip(self))]
    pub fn create(
        &self,
        name: &str,
        options: &StrategyOptions,
    ) -> Result<Box<dyn Strategy>, GameError> {
        let (_, factory) = self
            .entries
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| GameError::UnknownStrategy(name.to_string()))?;
        debug!(name, "Creating strategy");
        Ok(factory(options))
    }

    /// Returns the number of registered strategies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn make_minimax(options: &StrategyOptions) -> Box<dyn Strategy> {
    Box::new(Minimax::with_opening(options.opening))
}

fn make_random(options: &StrategyOptions) -> Box<dyn Strategy> {
    match options.seed {
        Some(seed) => Box::new(RandomAi::seeded(seed)),
        None => Box::new(RandomAi::new()),
    }
}
