//! Error types for complexity computation.

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the factorizers and the [`ComplexityEngine`](crate::ComplexityEngine).
///
/// Empty input is never an error: every strategy reports a complexity of 0.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComplexityError {
    /// The suffix automaton's transition table would not fit the memory ceiling.
    #[error(
        "suffix automaton needs an estimated {estimated} bytes, limit is {limit} bytes"
    )]
    ResourceExhausted {
        /// Estimated size of the transition table in bytes
        estimated: usize,
        /// Configured ceiling in bytes
        limit: usize,
    },

    /// A deadline-aware computation ran past its time budget.
    #[error("time budget of {budget:?} exceeded after {elapsed:?}")]
    BudgetExceeded {
        /// Time spent before the overrun was noticed
        elapsed: Duration,
        /// The budget that was armed
        budget: Duration,
    },

    /// More ids are needed than a 32-bit index can name.
    #[error("{needed} ids do not fit the 32-bit id space")]
    IdSpaceExhausted {
        /// Number of distinct ids the input requires
        needed: usize,
    },

    /// Engine configuration is unusable.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration
        message: String,
    },
}

impl ComplexityError {
    /// Creates an invalid configuration error.
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns true if this error is recoverable by switching strategy.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ResourceExhausted { .. }
                | Self::BudgetExceeded { .. }
                | Self::IdSpaceExhausted { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ComplexityError>;
