//! LZ76 production complexity from a suffix array and its LCP array.
//!
//! The longest earlier match for every position is read off a
//! longest-previous-factor array, so the factorization itself is a linear
//! walk and the suffix array build dominates the cost.

use crate::factor::{Factor, Factorization};
use crate::lcp::LcpArray;
use crate::suffix_array::SuffixArray;

/// Computes `lpf[i] = max_{j < i} lcp(text[j..], text[i..])`.
///
/// The best earlier source for a suffix is its nearest neighbour in suffix
/// order that starts before it, looking both up and down. Two monotone stack
/// sweeps find those neighbours and the LCP minimum across the gap in O(N).
pub fn longest_previous_factor(sa: &SuffixArray, lcp: &LcpArray) -> Vec<usize> {
    let sa = sa.as_slice();
    let lcp = lcp.as_slice();
    let n = sa.len();
    let mut lpf = vec![0usize; n];

    // Stack entries are (rank, lcp with the entry beneath).
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(n);

    for r in 0..n {
        let mut h = if r > 0 { lcp[r] } else { 0 };
        while let Some(&(top, beneath)) = stack.last() {
            if sa[top] < sa[r] {
                break;
            }
            h = h.min(beneath);
            stack.pop();
        }
        if stack.is_empty() {
            h = 0;
        }
        lpf[sa[r]] = h;
        stack.push((r, h));
    }

    stack.clear();
    for r in (0..n).rev() {
        let mut h = if r + 1 < n { lcp[r + 1] } else { 0 };
        while let Some(&(top, beneath)) = stack.last() {
            if sa[top] < sa[r] {
                break;
            }
            h = h.min(beneath);
            stack.pop();
        }
        if stack.is_empty() {
            h = 0;
        }
        lpf[sa[r]] = lpf[sa[r]].max(h);
        stack.push((r, h));
    }

    lpf
}

/// Suffix-array based LZ76 factorizer.
///
/// Produces exactly the factorization of [`NaiveFactorizer`](crate::NaiveFactorizer)
/// in O(N log N) regardless of input structure.
#[derive(Debug, Clone)]
pub struct SuffixArrayFactorizer {
    suffix_array: SuffixArray,
    lcp: LcpArray,
    lpf: Vec<usize>,
}

impl SuffixArrayFactorizer {
    /// Builds the suffix array, LCP and previous-factor arrays for `sequence`.
    pub fn new<T: Ord>(sequence: &[T]) -> Self {
        let suffix_array = SuffixArray::new(sequence);
        let lcp = LcpArray::kasai(sequence, &suffix_array);
        let lpf = longest_previous_factor(&suffix_array, &lcp);
        log::trace!("suffix array and lcp built for {} symbols", sequence.len());
        Self {
            suffix_array,
            lcp,
            lpf,
        }
    }

    /// The suffix array of the input.
    pub fn suffix_array(&self) -> &SuffixArray {
        &self.suffix_array
    }

    /// The LCP array of the input.
    pub fn lcp(&self) -> &LcpArray {
        &self.lcp
    }

    /// Length of the longest earlier match at each position.
    pub fn longest_previous_factor(&self) -> &[usize] {
        &self.lpf
    }

    /// Iterates over the productions.
    pub fn factors(&self) -> impl Iterator<Item = Factor> + '_ {
        let n = self.lpf.len();
        let mut i = 0;
        std::iter::from_fn(move || {
            if i >= n {
                return None;
            }
            let matched = self.lpf[i];
            let len = if i + matched >= n { n - i } else { matched + 1 };
            let factor = Factor::new(i, len);
            i += len;
            Some(factor)
        })
    }

    /// Collects the productions.
    pub fn factorization(&self) -> Factorization {
        self.factors().collect()
    }

    /// LZ76 production complexity.
    pub fn count(&self) -> usize {
        self.factors().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive::{naive_complexity, NaiveFactorizer};

    fn brute_lpf(text: &[u8]) -> Vec<usize> {
        (0..text.len())
            .map(|i| {
                (0..i)
                    .map(|j| {
                        text[j..]
                            .iter()
                            .zip(&text[i..])
                            .take_while(|(a, b)| a == b)
                            .count()
                    })
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    #[test]
    fn test_lpf_against_brute_force() {
        for text in [
            &b"abaababaab"[..],
            b"aaaa",
            b"mississippi",
            b"0001101001000101",
            b"abcdef",
            b"",
        ] {
            let f = SuffixArrayFactorizer::new(text);
            assert_eq!(
                f.longest_previous_factor(),
                brute_lpf(text).as_slice(),
                "{:?}",
                String::from_utf8_lossy(text)
            );
        }
    }

    #[test]
    fn test_worked_examples() {
        assert_eq!(SuffixArrayFactorizer::new::<u8>(&[]).count(), 0);
        assert_eq!(SuffixArrayFactorizer::new(b"aaaa").count(), 2);
        assert_eq!(SuffixArrayFactorizer::new(b"abab").count(), 3);
        assert_eq!(SuffixArrayFactorizer::new(b"0001101001000101").count(), 6);
    }

    #[test]
    fn test_same_factors_as_naive() {
        let text = b"the quick brown fox jumps over the lazy dog the quick brown fox";
        let expected = NaiveFactorizer::new(text).factorization();
        let f = SuffixArrayFactorizer::new(text).factorization();
        assert_eq!(f, expected);
        assert_eq!(f.complexity(), naive_complexity(text));
        assert!(f.partitions(text.len()));
    }
}
