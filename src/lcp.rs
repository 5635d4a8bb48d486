//! Longest-common-prefix array (Kasai et al.).

use crate::suffix_array::SuffixArray;

/// `lcp[i]` is the length of the longest common prefix of the suffixes at
/// `sa[i - 1]` and `sa[i]`; `lcp[0]` is 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcpArray {
    lcp: Vec<usize>,
}

impl LcpArray {
    /// Builds the LCP array in O(N).
    ///
    /// Walks positions in text order. The match length `h` found for position
    /// `i` drops by at most one for `i + 1`, so the inner extension does O(N)
    /// work in total.
    pub fn kasai<T: PartialEq>(text: &[T], sa: &SuffixArray) -> Self {
        let n = text.len();
        let sa = sa.as_slice();
        debug_assert_eq!(sa.len(), n);

        let mut rank = vec![0usize; n];
        for (i, &pos) in sa.iter().enumerate() {
            rank[pos] = i;
        }

        let mut lcp = vec![0usize; n];
        let mut h = 0;
        for i in 0..n {
            if rank[i] > 0 {
                let j = sa[rank[i] - 1];
                while i + h < n && j + h < n && text[i + h] == text[j + h] {
                    h += 1;
                }
                lcp[rank[i]] = h;
                h = h.saturating_sub(1);
            } else {
                h = 0;
            }
        }

        Self { lcp }
    }

    /// The LCP values in suffix order.
    pub fn as_slice(&self) -> &[usize] {
        &self.lcp
    }

    /// Number of entries (equal to the text length).
    pub fn len(&self) -> usize {
        self.lcp.len()
    }

    /// Returns true if the text was empty.
    pub fn is_empty(&self) -> bool {
        self.lcp.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common_prefix<T: PartialEq>(a: &[T], b: &[T]) -> usize {
        a.iter().zip(b).take_while(|(x, y)| x == y).count()
    }

    fn check(text: &[u8]) {
        let sa = SuffixArray::new(text);
        let lcp = LcpArray::kasai(text, &sa);
        assert_eq!(lcp.len(), text.len());
        let sa = sa.as_slice();
        for i in 1..text.len() {
            assert_eq!(
                lcp.as_slice()[i],
                common_prefix(&text[sa[i - 1]..], &text[sa[i]..]),
                "lcp[{}] of {:?}",
                i,
                String::from_utf8_lossy(text)
            );
        }
    }

    #[test]
    fn test_banana() {
        let text = b"banana";
        let lcp = LcpArray::kasai(text, &SuffixArray::new(text));
        assert_eq!(lcp.as_slice(), &[0, 1, 3, 0, 0, 2]);
    }

    #[test]
    fn test_against_direct_comparison() {
        for text in [
            &b"mississippi"[..],
            b"aaaaaaa",
            b"abababab",
            b"abcdefg",
            b"0001101001000101",
            b"x",
        ] {
            check(text);
        }
    }

    #[test]
    fn test_empty() {
        let lcp = LcpArray::kasai::<u8>(&[], &SuffixArray::new::<u8>(&[]));
        assert!(lcp.is_empty());
    }
}
