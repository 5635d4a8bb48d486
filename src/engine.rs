//! Uniform entry point over the three factorizers.

use crate::alphabet::AlphabetCompactor;
use crate::automaton::{estimate_automaton_bytes, SuffixAutomatonFactorizer};
use crate::config::EngineConfig;
use crate::deadline::Deadline;
use crate::error::{ComplexityError, Result};
use crate::naive::NaiveFactorizer;
use crate::sa_factorizer::SuffixArrayFactorizer;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// How the complexity is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Pointer-chasing LZ76 scan, quadratic worst case
    Naive,
    /// Suffix array + LCP, same counts as `Naive`
    SuffixArray,
    /// Suffix automaton, non-overlapping factors
    SuffixAutomaton,
    /// Naive under a time budget, falling back to a bounded strategy
    Auto,
}

/// Which complexity notion a count measures.
///
/// The two agree on many inputs but not all: on a run of one repeated symbol
/// a production may copy from itself, a non-overlapping factor may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// LZ76 productions; a copy may overlap the production being built
    Production,
    /// Copies come only from finished history, plus one literal
    NonOverlapping,
}

impl Strategy {
    /// The metric computed by a concrete strategy; `None` for `Auto`.
    pub fn metric(self) -> Option<Metric> {
        match self {
            Strategy::Naive | Strategy::SuffixArray => Some(Metric::Production),
            Strategy::SuffixAutomaton => Some(Metric::NonOverlapping),
            Strategy::Auto => None,
        }
    }

    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::SuffixArray => "suffix-array",
            Strategy::SuffixAutomaton => "suffix-automaton",
            Strategy::Auto => "auto",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ComplexityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(Strategy::Naive),
            "suffix-array" | "sa" => Ok(Strategy::SuffixArray),
            "suffix-automaton" | "sam" => Ok(Strategy::SuffixAutomaton),
            "auto" => Ok(Strategy::Auto),
            other => Err(ComplexityError::invalid_config(format!(
                "unknown strategy '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Production => f.write_str("LZ76 production"),
            Metric::NonOverlapping => f.write_str("non-overlapping"),
        }
    }
}

/// Outcome of one [`ComplexityEngine::compute`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityResult {
    /// Number of factors
    pub count: usize,
    /// Wall time of the strategy that produced `count`
    pub elapsed: Duration,
    /// The concrete strategy that produced `count`
    pub strategy_used: Strategy,
    /// What `count` measures
    pub metric: Metric,
    /// Wall time of an abandoned attempt, zero if there was none
    pub discarded: Duration,
}

/// Runs a configured strategy over a sequence.
///
/// Holds only its configuration, so one engine can serve any number of
/// independent calls.
#[derive(Debug, Clone, Default)]
pub struct ComplexityEngine {
    config: EngineConfig,
}

impl ComplexityEngine {
    /// Creates an engine after validating `config`.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the complexity of `sequence`.
    ///
    /// Explicit strategies run to completion; `SuffixAutomaton` fails with
    /// [`ComplexityError::ResourceExhausted`] when its table would not fit.
    /// `Auto` never surfaces a budget or memory error.
    pub fn compute<T: Ord + Hash + Clone>(&self, sequence: &[T]) -> Result<ComplexityResult> {
        let strategy = self.config.strategy;
        log::debug!("computing complexity of {} symbols with {}", sequence.len(), strategy);

        if sequence.is_empty() {
            let strategy_used = match strategy {
                Strategy::Auto => Strategy::Naive,
                concrete => concrete,
            };
            return Ok(finished(0, Duration::ZERO, strategy_used, Duration::ZERO));
        }

        match strategy {
            Strategy::Auto => self.compute_auto(sequence),
            Strategy::Naive => timed(Strategy::Naive, Duration::ZERO, || {
                Ok(NaiveFactorizer::new(sequence).count())
            }),
            Strategy::SuffixArray => timed(Strategy::SuffixArray, Duration::ZERO, || {
                Ok(SuffixArrayFactorizer::new(sequence).count())
            }),
            Strategy::SuffixAutomaton => timed(Strategy::SuffixAutomaton, Duration::ZERO, || {
                Ok(SuffixAutomatonFactorizer::new(sequence, self.config.memory_limit_bytes)?
                    .count())
            }),
        }
    }

    /// Picks the bounded strategy `Auto` falls back to for `sequence`.
    ///
    /// `SuffixAutomaton` when its estimated table fits the memory ceiling,
    /// `SuffixArray` otherwise.
    pub fn fallback_strategy<T: Hash + Eq + Clone>(&self, sequence: &[T]) -> Strategy {
        AlphabetCompactor::new(sequence).map_or(Strategy::SuffixArray, |alphabet| {
            self.fallback_for(sequence.len(), alphabet.len())
        })
    }

    fn fallback_for(&self, len: usize, alphabet: usize) -> Strategy {
        match estimate_automaton_bytes(len, alphabet) {
            Some(bytes) if bytes <= self.config.memory_limit_bytes => Strategy::SuffixAutomaton,
            _ => Strategy::SuffixArray,
        }
    }

    fn compute_auto<T: Ord + Hash + Clone>(&self, sequence: &[T]) -> Result<ComplexityResult> {
        let mut discarded = Duration::ZERO;

        if sequence.len() <= self.config.naive_length_limit {
            let start = Instant::now();
            let deadline = Deadline::after(self.config.time_budget);
            match NaiveFactorizer::new(sequence).count_until(&deadline) {
                Ok(count) => {
                    return Ok(finished(count, start.elapsed(), Strategy::Naive, discarded));
                }
                Err(err) if err.is_recoverable() => {
                    discarded = start.elapsed();
                    log::warn!("naive attempt abandoned: {}", err);
                }
                Err(err) => return Err(err),
            }
        } else {
            log::debug!(
                "{} symbols exceed the naive limit of {}, skipping naive attempt",
                sequence.len(),
                self.config.naive_length_limit
            );
        }

        match AlphabetCompactor::new(sequence) {
            Ok(alphabet)
                if self.fallback_for(sequence.len(), alphabet.len())
                    == Strategy::SuffixAutomaton =>
            {
                let attempt = timed(Strategy::SuffixAutomaton, discarded, || {
                    Ok(SuffixAutomatonFactorizer::with_alphabet(
                        sequence,
                        &alphabet,
                        self.config.memory_limit_bytes,
                    )?
                    .count())
                });
                match attempt {
                    Err(err) if err.is_recoverable() => {
                        log::warn!("suffix automaton unavailable: {}", err);
                    }
                    other => return other,
                }
            }
            Ok(alphabet) => {
                log::debug!(
                    "suffix automaton for alphabet {} exceeds {} bytes",
                    alphabet.len(),
                    self.config.memory_limit_bytes
                );
            }
            Err(err) => log::warn!("alphabet unavailable: {}", err),
        }

        timed(Strategy::SuffixArray, discarded, || {
            Ok(SuffixArrayFactorizer::new(sequence).count())
        })
    }
}

fn finished(
    count: usize,
    elapsed: Duration,
    strategy_used: Strategy,
    discarded: Duration,
) -> ComplexityResult {
    ComplexityResult {
        count,
        elapsed,
        strategy_used,
        metric: strategy_used.metric().unwrap_or(Metric::Production),
        discarded,
    }
}

fn timed<F>(strategy: Strategy, discarded: Duration, run: F) -> Result<ComplexityResult>
where
    F: FnOnce() -> Result<usize>,
{
    let start = Instant::now();
    let count = run()?;
    let elapsed = start.elapsed();
    log::trace!("{} finished with {} factors in {:?}", strategy, count, elapsed);
    Ok(finished(count, elapsed, strategy, discarded))
}

/// Computes the complexity of `sequence` with the default configuration:
/// `Auto`, a 1 GB automaton ceiling and a one second naive budget.
pub fn compute<T: Ord + Hash + Clone>(sequence: &[T]) -> Result<ComplexityResult> {
    ComplexityEngine::default().compute(sequence)
}
