//! # lz76-rs - Lempel-Ziv complexity of symbol sequences
//!
//! Counts the factors of a greedy self-referential factorization of a finite
//! sequence, a classical measure of how compressible (or how random) the
//! sequence is.
//!
//! Three strategies are available:
//! 1. **Naive**: the Kaspar–Schuster pointer-chasing scan. Fast on typical
//!    input, quadratic in the worst case.
//! 2. **SuffixArray**: a prefix-doubling suffix array, Kasai LCP and a
//!    longest-previous-factor array. Same counts as `Naive`, O(N log N) bound.
//! 3. **SuffixAutomaton**: an online suffix automaton matched greedily against
//!    the consumed history. Linear time, but it counts *non-overlapping*
//!    factors and its transition table is `2N × M` entries wide.
//!
//! `Auto` runs `Naive` under a time budget and falls back to a bounded strategy.
//!
//! ## Example
//!
//! ```
//! use lz76_rs::{compute, ComplexityEngine, EngineConfig, Strategy};
//!
//! let result = compute(b"0001101001000101").unwrap();
//! assert_eq!(result.count, 6);
//!
//! let engine = ComplexityEngine::new(
//!     EngineConfig::default().with_strategy(Strategy::SuffixArray),
//! )
//! .unwrap();
//! assert_eq!(engine.compute(b"abab").unwrap().count, 3);
//! ```

mod alphabet;
mod automaton;
mod config;
mod deadline;
mod engine;
mod error;
mod factor;
mod lcp;
mod naive;
mod sa_factorizer;
mod suffix_array;


pub use alphabet::AlphabetCompactor;
pub use automaton::{estimate_automaton_bytes, SuffixAutomaton, SuffixAutomatonFactorizer, NO_STATE};
pub use config::{
    EngineConfig, DEFAULT_MEMORY_LIMIT, DEFAULT_NAIVE_LENGTH_LIMIT, DEFAULT_TIME_BUDGET,
};
pub use deadline::Deadline;
pub use engine::{compute, ComplexityEngine, ComplexityResult, Metric, Strategy};
pub use error::{ComplexityError, Result};
pub use factor::{Factor, Factorization};
pub use lcp::LcpArray;
pub use naive::{naive_complexity, NaiveFactorizer};
pub use sa_factorizer::{longest_previous_factor, SuffixArrayFactorizer};
pub use suffix_array::SuffixArray;
