/// One step of a factorization: the run `[start, start + len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Factor {
    /// Offset of the first symbol
    pub start: usize,
    /// Number of symbols consumed
    pub len: usize,
}

impl Factor {
    /// Creates a factor.
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Offset one past the last symbol.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// An ordered sequence of factors. Its length is the complexity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Factorization {
    factors: Vec<Factor>,
}

impl Factorization {
    /// Wraps a list of factors.
    pub fn new(factors: Vec<Factor>) -> Self {
        Self { factors }
    }

    /// Number of factors.
    pub fn complexity(&self) -> usize {
        self.factors.len()
    }

    /// The factors in order.
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    /// Returns true if the factors tile `[0, len)` exactly, in order, with no empty factor.
    pub fn partitions(&self, len: usize) -> bool {
        let mut expected = 0;
        for factor in &self.factors {
            if factor.start != expected || factor.len == 0 {
                return false;
            }
            expected = factor.end();
        }
        expected == len
    }
}

impl FromIterator<Factor> for Factorization {
    fn from_iter<I: IntoIterator<Item = Factor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Factorization {
    type Item = &'a Factor;
    type IntoIter = std::slice::Iter<'a, Factor>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.iter()
    }
}
