//! Online LZ76 production counting by pointer chasing.
//!
//! This is the Kaspar–Schuster scan: for the production starting at
//! `prefix_length`, every earlier offset is tried as a copy source and the
//! longest match wins. Matches may run into the production itself. A completed
//! production is the longest match plus one literal symbol; a match that
//! reaches the end of the input closes the last production without a literal.
//!
//! Worst case is quadratic, which is why the engine arms a deadline around it.

use crate::deadline::Deadline;
use crate::error::Result;
use crate::factor::{Factor, Factorization};

/// Number of symbol comparisons between deadline polls.
const POLL_INTERVAL: u64 = 1 << 12;

/// Iterator over the LZ76 productions of a sequence.
///
/// If [`NaiveFactorizer::next_factor`] fails with a deadline error the cursor is
/// left mid-production and the factorizer should be dropped.
#[derive(Debug, Clone)]
pub struct NaiveFactorizer<'a, T> {
    sequence: &'a [T],

    /// Length of the already produced prefix
    prefix_length: usize,

    /// Offset inside the prefix currently used as copy source
    pointer: usize,

    /// One more than the number of symbols matched from `pointer`
    component_length: usize,

    /// Best `component_length` seen for the current production
    max_component_length: usize,

    /// Comparisons done so far
    steps: u64,
}

impl<'a, T: PartialEq> NaiveFactorizer<'a, T> {
    /// Creates a factorizer positioned at the start of `sequence`.
    pub fn new(sequence: &'a [T]) -> Self {
        Self {
            sequence,
            prefix_length: 0,
            pointer: 0,
            component_length: 1,
            max_component_length: 1,
            steps: 0,
        }
    }

    /// Produces the next factor, polling `deadline` every few thousand comparisons.
    pub fn next_factor(&mut self, deadline: &Deadline) -> Result<Option<Factor>> {
        let n = self.sequence.len();
        if self.prefix_length >= n {
            return Ok(None);
        }

        // The first symbol has no history and is always its own production.
        if self.prefix_length == 0 {
            self.prefix_length = 1;
            return Ok(Some(Factor::new(0, 1)));
        }

        let start = self.prefix_length;
        let s = self.sequence;

        while self.prefix_length + self.component_length <= n {
            if self.steps % POLL_INTERVAL == 0 {
                deadline.check()?;
            }
            self.steps += 1;

            if s[self.pointer + self.component_length - 1]
                == s[self.prefix_length + self.component_length - 1]
            {
                self.component_length += 1;
                continue;
            }

            self.max_component_length = self.max_component_length.max(self.component_length);
            self.pointer += 1;
            self.component_length = 1;

            if self.pointer == self.prefix_length {
                let len = self.max_component_length;
                self.prefix_length += len;
                self.pointer = 0;
                self.max_component_length = 1;
                return Ok(Some(Factor::new(start, len)));
            }
        }

        // Some copy source matched all the way to the end of the input.
        self.prefix_length = n;
        Ok(Some(Factor::new(start, n - start)))
    }

    /// Counts the remaining productions, failing if `deadline` expires first.
    pub fn count_until(mut self, deadline: &Deadline) -> Result<usize> {
        deadline.check()?;
        let mut count = 0;
        while self.next_factor(deadline)?.is_some() {
            count += 1;
        }
        Ok(count)
    }

    /// Collects the remaining productions.
    pub fn factorization(self) -> Factorization {
        self.collect()
    }
}

impl<T: PartialEq> Iterator for NaiveFactorizer<'_, T> {
    type Item = Factor;

    fn next(&mut self) -> Option<Factor> {
        // An unbounded deadline never fails.
        self.next_factor(&Deadline::none()).ok().flatten()
    }
}

/// LZ76 production complexity of `sequence`. Zero for empty input.
pub fn naive_complexity<T: PartialEq>(sequence: &[T]) -> usize {
    NaiveFactorizer::new(sequence).count()
}
