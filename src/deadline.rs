use crate::error::{ComplexityError, Result};
use std::time::{Duration, Instant};

/// A wall-clock budget armed before a strategy starts and polled while it runs.
///
/// Cancellation is cooperative: factorizers call [`Deadline::check`] between
/// units of work and stop with [`ComplexityError::BudgetExceeded`].
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    armed: Option<(Instant, Duration)>,
}

impl Deadline {
    /// A deadline that never expires.
    pub fn none() -> Self {
        Self { armed: None }
    }

    /// Arms a deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self {
            armed: Some((Instant::now(), budget)),
        }
    }

    /// Returns true if no budget is armed.
    pub fn is_unbounded(&self) -> bool {
        self.armed.is_none()
    }

    /// Fails once the budget has been used up. A zero budget fails on the first check.
    pub fn check(&self) -> Result<()> {
        match self.armed {
            Some((start, budget)) => {
                let elapsed = start.elapsed();
                if elapsed >= budget {
                    Err(ComplexityError::BudgetExceeded { elapsed, budget })
                } else {
                    Ok(())
                }
            }
            None => Ok(()),
        }
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::none()
    }
}
