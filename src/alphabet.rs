//! Dense renumbering of the symbols present in a sequence.
//!
//! The suffix automaton stores one transition row of width `M` per state, so
//! mapping raw symbols onto `[0, M)` keeps its table as narrow as the input
//! allows.

use crate::error::{ComplexityError, Result};
use ahash::AHashMap as HashMap;
use std::hash::Hash;

/// Bijection between the distinct symbols of a sequence and `[0, M)`.
///
/// Indices are assigned in order of first appearance.
#[derive(Debug, Clone)]
pub struct AlphabetCompactor<T> {
    /// Distinct symbols, indexed by their dense index
    symbols: Vec<T>,

    /// Maps symbols to their dense index
    symbol_to_index: HashMap<T, u32>,
}

/// Index of the next new symbol when `assigned` are already taken.
fn dense_index(assigned: usize) -> Result<u32> {
    u32::try_from(assigned).map_err(|_| ComplexityError::IdSpaceExhausted {
        needed: assigned.saturating_add(1),
    })
}

impl<T: Hash + Eq + Clone> AlphabetCompactor<T> {
    /// Builds the mapping for every symbol appearing in `sequence`.
    ///
    /// Fails with [`ComplexityError::IdSpaceExhausted`] if the sequence holds
    /// more distinct symbols than a `u32` index can name.
    pub fn new(sequence: &[T]) -> Result<Self> {
        let mut compactor = Self {
            symbols: Vec::new(),
            symbol_to_index: HashMap::default(),
        };
        for symbol in sequence {
            compactor.intern(symbol)?;
        }
        Ok(compactor)
    }

    fn intern(&mut self, symbol: &T) -> Result<u32> {
        if let Some(&index) = self.symbol_to_index.get(symbol) {
            return Ok(index);
        }
        let index = dense_index(self.symbols.len())?;
        self.symbols.push(symbol.clone());
        self.symbol_to_index.insert(symbol.clone(), index);
        Ok(index)
    }

    /// Returns the dense index of `symbol`, or `None` if it never appeared.
    pub fn index_of(&self, symbol: &T) -> Option<u32> {
        self.symbol_to_index.get(symbol).copied()
    }

    /// Returns the raw symbol behind a dense index.
    pub fn symbol(&self, index: u32) -> Option<&T> {
        self.symbols.get(index as usize)
    }

    /// Maps a sequence onto dense indices.
    ///
    /// Symbols absent from the alphabet are skipped; callers compact the same
    /// sequence the compactor was built from.
    pub fn compact(&self, sequence: &[T]) -> Vec<u32> {
        sequence.iter().filter_map(|s| self.index_of(s)).collect()
    }

    /// Number of distinct symbols (`M`).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the source sequence was empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_appearance_order() {
        let alphabet = AlphabetCompactor::new(b"banana").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.index_of(&b'b'), Some(0));
        assert_eq!(alphabet.index_of(&b'a'), Some(1));
        assert_eq!(alphabet.index_of(&b'n'), Some(2));
        assert_eq!(alphabet.compact(b"banana"), vec![0, 1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_absent_symbol() {
        let alphabet = AlphabetCompactor::new(b"abc").unwrap();
        assert_eq!(alphabet.index_of(&b'z'), None);
        assert_eq!(alphabet.symbol(3), None);
    }

    #[test]
    fn test_empty() {
        let alphabet = AlphabetCompactor::<u8>::new(&[]).unwrap();
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.len(), 0);
    }

    #[test]
    fn test_bijection() {
        let text: Vec<char> = "the quick brown fox".chars().collect();
        let alphabet = AlphabetCompactor::new(&text).unwrap();
        for index in 0..alphabet.len() as u32 {
            let symbol = alphabet.symbol(index).unwrap();
            assert_eq!(alphabet.index_of(symbol), Some(index));
        }
    }

    #[test]
    fn test_deterministic() {
        let a = AlphabetCompactor::new(b"mississippi").unwrap();
        let b = AlphabetCompactor::new(b"mississippi").unwrap();
        assert_eq!(a.compact(b"mississippi"), b.compact(b"mississippi"));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_index_space_is_bounded() {
        assert_eq!(dense_index(u32::MAX as usize).unwrap(), u32::MAX);
        assert_eq!(
            dense_index(u32::MAX as usize + 1),
            Err(ComplexityError::IdSpaceExhausted {
                needed: u32::MAX as usize + 2
            })
        );
    }
}
