use crate::engine::Strategy;
use crate::error::{ComplexityError, Result};
use std::time::Duration;

/// Default ceiling for the suffix automaton's transition table.
pub const DEFAULT_MEMORY_LIMIT: usize = 1_000_000_000;

/// Default wall-clock budget for the naive attempt under [`Strategy::Auto`].
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(1);

/// Inputs longer than this skip the naive attempt under [`Strategy::Auto`].
pub const DEFAULT_NAIVE_LENGTH_LIMIT: usize = 100_000;

/// Configuration for a [`ComplexityEngine`](crate::ComplexityEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Strategy to run
    pub strategy: Strategy,
    /// Ceiling for the automaton's estimated memory use, in bytes
    pub memory_limit_bytes: usize,
    /// Budget for the naive attempt under `Auto`
    pub time_budget: Duration,
    /// Longest input `Auto` will try the naive factorizer on
    pub naive_length_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            memory_limit_bytes: DEFAULT_MEMORY_LIMIT,
            time_budget: DEFAULT_TIME_BUDGET,
            naive_length_limit: DEFAULT_NAIVE_LENGTH_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the automaton memory ceiling.
    pub fn with_memory_limit(mut self, bytes: usize) -> Self {
        self.memory_limit_bytes = bytes;
        self
    }

    /// Sets the naive attempt's time budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Sets the longest input the naive attempt is tried on.
    pub fn with_naive_length_limit(mut self, limit: usize) -> Self {
        self.naive_length_limit = limit;
        self
    }

    /// Checks that the configuration can be used.
    ///
    /// A zero time budget is accepted; it makes `Auto` go straight to the fallback.
    pub fn validate(&self) -> Result<()> {
        if self.memory_limit_bytes == 0 {
            return Err(ComplexityError::invalid_config(
                "memory_limit_bytes must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.strategy, Strategy::Auto);
        assert_eq!(config.memory_limit_bytes, 1_000_000_000);
        assert_eq!(config.time_budget, Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .with_strategy(Strategy::Naive)
            .with_memory_limit(64)
            .with_time_budget(Duration::from_millis(10))
            .with_naive_length_limit(7);
        assert_eq!(config.strategy, Strategy::Naive);
        assert_eq!(config.memory_limit_bytes, 64);
        assert_eq!(config.time_budget, Duration::from_millis(10));
        assert_eq!(config.naive_length_limit, 7);
    }

    #[test]
    fn test_zero_memory_limit_rejected() {
        let config = EngineConfig::default().with_memory_limit(0);
        assert!(matches!(
            config.validate(),
            Err(ComplexityError::InvalidConfig { .. })
        ));
    }
}
