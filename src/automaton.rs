//! Suffix automaton and the non-overlapping factor count built on it.
//!
//! The automaton is kept as parallel arrays indexed by plain `u32` state ids:
//! a `capacity × M` transition table, suffix links and lengths. Capacity is
//! fixed when the automaton is created (`2N` states for an `N` symbol input,
//! enough for the `2N - 1` bound) and the table size is checked against the
//! memory ceiling before anything is allocated.

use crate::alphabet::AlphabetCompactor;
use crate::error::{ComplexityError, Result};
use crate::factor::{Factor, Factorization};
use std::hash::Hash;

/// Marks a missing transition and the suffix link of the initial state.
pub const NO_STATE: u32 = u32::MAX;

/// Estimated transition table size for `len` symbols over `alphabet` distinct
/// symbols: `2N × M × size_of::<u32>()`. `None` on arithmetic overflow.
pub fn estimate_automaton_bytes(len: usize, alphabet: usize) -> Option<usize> {
    len.checked_mul(2)?
        .checked_mul(alphabet)?
        .checked_mul(std::mem::size_of::<u32>())
}

/// Counters rewritten by every extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frontier {
    /// Number of states in use
    size: usize,
    /// State of the whole string consumed so far
    last: u32,
}

/// The state arena.
#[derive(Debug, Clone)]
struct StateTables {
    alphabet: usize,
    capacity: usize,
    next: Vec<u32>,
    link: Vec<u32>,
    length: Vec<u32>,
}

fn try_filled(len: usize, value: u32, estimated: usize, limit: usize) -> Result<Vec<u32>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| ComplexityError::ResourceExhausted { estimated, limit })?;
    v.resize(len, value);
    Ok(v)
}

impl StateTables {
    fn allocate(capacity: usize, alphabet: usize, limit: usize) -> Result<Self> {
        let cells = capacity
            .checked_mul(alphabet)
            .ok_or(ComplexityError::ResourceExhausted {
                estimated: usize::MAX,
                limit,
            })?;
        let estimated = cells.saturating_mul(std::mem::size_of::<u32>());
        if estimated > limit {
            return Err(ComplexityError::ResourceExhausted { estimated, limit });
        }

        let next = try_filled(cells, NO_STATE, estimated, limit)?;
        let link = try_filled(capacity, NO_STATE, estimated, limit)?;
        let length = try_filled(capacity, 0, estimated, limit)?;

        Ok(Self {
            alphabet,
            capacity,
            next,
            link,
            length,
        })
    }

    #[inline]
    fn slot(&self, state: u32, symbol: u32) -> usize {
        state as usize * self.alphabet + symbol as usize
    }

    /// Online extension by one symbol.
    fn extend(&mut self, frontier: &mut Frontier, symbol: u32) {
        debug_assert!((symbol as usize) < self.alphabet);
        debug_assert!(frontier.size < self.capacity);

        let cur = frontier.size as u32;
        frontier.size += 1;
        self.length[cur as usize] = self.length[frontier.last as usize] + 1;

        let mut p = frontier.last;
        while p != NO_STATE {
            let slot = self.slot(p, symbol);
            if self.next[slot] != NO_STATE {
                break;
            }
            self.next[slot] = cur;
            p = self.link[p as usize];
        }

        if p == NO_STATE {
            self.link[cur as usize] = 0;
        } else {
            let q = self.next[self.slot(p, symbol)];
            if self.length[p as usize] + 1 == self.length[q as usize] {
                self.link[cur as usize] = q;
            } else {
                debug_assert!(frontier.size < self.capacity);
                let clone = frontier.size as u32;
                frontier.size += 1;

                self.length[clone as usize] = self.length[p as usize] + 1;
                let row = q as usize * self.alphabet;
                self.next
                    .copy_within(row..row + self.alphabet, clone as usize * self.alphabet);
                self.link[clone as usize] = self.link[q as usize];

                while p != NO_STATE {
                    let slot = self.slot(p, symbol);
                    if self.next[slot] != q {
                        break;
                    }
                    self.next[slot] = clone;
                    p = self.link[p as usize];
                }
                self.link[q as usize] = clone;
                self.link[cur as usize] = clone;
            }
        }

        frontier.last = cur;
    }
}

/// Incrementally built suffix automaton over dense symbols `[0, M)`.
#[derive(Debug, Clone)]
pub struct SuffixAutomaton {
    tables: StateTables,
    frontier: Frontier,
}

impl SuffixAutomaton {
    /// Creates an empty automaton able to absorb `max_len` symbols over an
    /// alphabet of `alphabet` symbols.
    ///
    /// Fails with [`ComplexityError::ResourceExhausted`] if the transition table
    /// would exceed `memory_limit` bytes or cannot be allocated, and with
    /// [`ComplexityError::IdSpaceExhausted`] if `2 × max_len` states cannot all
    /// be named by a `u32` id other than [`NO_STATE`].
    pub fn with_capacity(max_len: usize, alphabet: usize, memory_limit: usize) -> Result<Self> {
        let capacity = max_len.max(1).checked_mul(2).ok_or(
            ComplexityError::ResourceExhausted {
                estimated: usize::MAX,
                limit: memory_limit,
            },
        )?;
        if capacity > NO_STATE as usize {
            return Err(ComplexityError::IdSpaceExhausted { needed: capacity });
        }
        Ok(Self {
            tables: StateTables::allocate(capacity, alphabet, memory_limit)?,
            frontier: Frontier { size: 1, last: 0 },
        })
    }

    /// Appends `symbol` to the indexed string.
    pub fn extend(&mut self, symbol: u32) {
        self.tables.extend(&mut self.frontier, symbol);
    }

    /// Follows the transition from `state` on `symbol`.
    #[inline]
    pub fn transition(&self, state: u32, symbol: u32) -> Option<u32> {
        if symbol as usize >= self.tables.alphabet {
            return None;
        }
        match self.tables.next[self.tables.slot(state, symbol)] {
            NO_STATE => None,
            next => Some(next),
        }
    }

    /// Suffix link of `state`; `None` for the initial state.
    pub fn suffix_link(&self, state: u32) -> Option<u32> {
        match self.tables.link[state as usize] {
            NO_STATE => None,
            link => Some(link),
        }
    }

    /// Length of the longest string ending in `state`.
    pub fn state_len(&self, state: u32) -> usize {
        self.tables.length[state as usize] as usize
    }

    /// Length of the longest prefix of `pattern` that occurs in the indexed string.
    pub fn longest_match(&self, pattern: &[u32]) -> usize {
        let mut state = 0;
        for (matched, &symbol) in pattern.iter().enumerate() {
            match self.transition(state, symbol) {
                Some(next) => state = next,
                None => return matched,
            }
        }
        pattern.len()
    }

    /// Returns true if `pattern` is a substring of the indexed string.
    pub fn accepts(&self, pattern: &[u32]) -> bool {
        self.longest_match(pattern) == pattern.len()
    }

    /// Number of states in use, including the initial state.
    pub fn state_count(&self) -> usize {
        self.frontier.size
    }

    /// Number of symbols absorbed so far.
    pub fn len(&self) -> usize {
        self.state_len(self.frontier.last)
    }

    /// Returns true if no symbol has been absorbed.
    pub fn is_empty(&self) -> bool {
        self.frontier.last == 0
    }
}

/// Greedy non-overlapping factorization driven by a suffix automaton.
///
/// Each factor is the longest prefix of the remaining input that occurs
/// entirely inside the already consumed history, plus one literal symbol. A
/// match running to the end of the input is taken without a literal.
#[derive(Debug, Clone)]
pub struct SuffixAutomatonFactorizer {
    dense: Vec<u32>,
    automaton: SuffixAutomaton,
    cursor: usize,
}

impl SuffixAutomatonFactorizer {
    /// Compacts the alphabet of `sequence` and sizes the automaton for it.
    ///
    /// The memory estimate is checked before any table is allocated.
    pub fn new<T: Hash + Eq + Clone>(sequence: &[T], memory_limit: usize) -> Result<Self> {
        Self::with_alphabet(sequence, &AlphabetCompactor::new(sequence)?, memory_limit)
    }

    /// Like [`SuffixAutomatonFactorizer::new`] with an alphabet already built
    /// from `sequence`.
    pub fn with_alphabet<T: Hash + Eq + Clone>(
        sequence: &[T],
        alphabet: &AlphabetCompactor<T>,
        memory_limit: usize,
    ) -> Result<Self> {
        let estimated =
            estimate_automaton_bytes(sequence.len(), alphabet.len()).unwrap_or(usize::MAX);
        if estimated > memory_limit {
            return Err(ComplexityError::ResourceExhausted {
                estimated,
                limit: memory_limit,
            });
        }
        log::debug!(
            "suffix automaton for {} symbols, alphabet {}, ~{} bytes",
            sequence.len(),
            alphabet.len(),
            estimated
        );

        let automaton =
            SuffixAutomaton::with_capacity(sequence.len(), alphabet.len(), memory_limit)?;
        let dense = alphabet.compact(sequence);
        Ok(Self {
            dense,
            automaton,
            cursor: 0,
        })
    }

    /// The automaton over the symbols consumed so far.
    pub fn automaton(&self) -> &SuffixAutomaton {
        &self.automaton
    }

    /// Produces the next factor and absorbs its symbols into the automaton.
    pub fn next_factor(&mut self) -> Option<Factor> {
        let n = self.dense.len();
        let start = self.cursor;
        if start >= n {
            return None;
        }

        let matched = self.automaton.longest_match(&self.dense[start..]);
        let consumed = if start + matched == n {
            matched.max(1)
        } else {
            matched + 1
        };

        for &symbol in &self.dense[start..start + consumed] {
            self.automaton.extend(symbol);
        }
        self.cursor += consumed;
        Some(Factor::new(start, consumed))
    }

    /// Collects the remaining factors.
    pub fn factorization(self) -> Factorization {
        self.collect()
    }
}

impl Iterator for SuffixAutomatonFactorizer {
    type Item = Factor;

    fn next(&mut self) -> Option<Factor> {
        self.next_factor()
    }
}
