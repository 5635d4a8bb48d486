//! Suffix array construction by prefix doubling.
//!
//! Round `k` sorts positions by the pair `(rank[i], rank[i + k])`, where a
//! position whose second half runs off the end sorts below every real rank.
//! After the round, ranks order all substrings of length `2k`. There are at
//! most log N rounds of one comparison sort each, and construction stops early
//! once every rank is distinct.

/// Positions of a sequence ordered by their suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArray {
    sa: Vec<usize>,
}

/// Sort key of position `i` for a doubling round of width `k`.
///
/// The second component is shifted by one so that 0 is the "past the end" sentinel.
#[inline]
fn pair_key(rank: &[usize], i: usize, k: usize) -> (usize, usize) {
    let second = rank.get(i + k).map_or(0, |&r| r + 1);
    (rank[i], second)
}

impl SuffixArray {
    /// Builds the suffix array of `text`.
    pub fn new<T: Ord>(text: &[T]) -> Self {
        let n = text.len();
        if n == 0 {
            return Self { sa: Vec::new() };
        }

        // Round zero: rank by the first symbol alone.
        let mut sa: Vec<usize> = (0..n).collect();
        sa.sort_by(|&a, &b| text[a].cmp(&text[b]));
        let mut rank = vec![0usize; n];
        for w in 1..n {
            let (prev, cur) = (sa[w - 1], sa[w]);
            rank[cur] = rank[prev] + usize::from(text[prev] != text[cur]);
        }

        let mut next_rank = vec![0usize; n];
        let mut k = 1;
        while k < n && rank[sa[n - 1]] != n - 1 {
            sa.sort_unstable_by_key(|&i| pair_key(&rank, i, k));

            next_rank[sa[0]] = 0;
            for w in 1..n {
                let (prev, cur) = (sa[w - 1], sa[w]);
                let bump = pair_key(&rank, prev, k) < pair_key(&rank, cur, k);
                next_rank[cur] = next_rank[prev] + usize::from(bump);
            }
            std::mem::swap(&mut rank, &mut next_rank);

            log::trace!("prefix doubling round k={} distinct={}", k, rank[sa[n - 1]] + 1);
            k *= 2;
        }

        Self { sa }
    }

    /// The suffix start positions in lexicographic order.
    pub fn as_slice(&self) -> &[usize] {
        &self.sa
    }

    /// Length of the indexed sequence.
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    /// Returns true if the indexed sequence was empty.
    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// Inverse permutation: `rank[sa[i]] == i`.
    pub fn inverse(&self) -> Vec<usize> {
        let mut rank = vec![0; self.sa.len()];
        for (i, &pos) in self.sa.iter().enumerate() {
            rank[pos] = i;
        }
        rank
    }

    /// Checks that adjacent entries are in non-decreasing suffix order.
    pub fn is_sorted_for<T: Ord>(&self, text: &[T]) -> bool {
        self.sa.len() == text.len()
            && self
                .sa
                .windows(2)
                .all(|w| text[w[0]..] <= text[w[1]..])
    }
}
