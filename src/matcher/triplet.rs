//! Candidate index triplets.

use std::fmt;

use crate::error::Result;
use crate::series::Series;

/// Three series indices standing in for the coefficients `a`, `b` and `c`.
///
/// Ordered lexicographically by `(i, j, k)` so result sets iterate
/// deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triplet {
    /// Index standing in for `a` (the common denominator)
    pub i: usize,
    /// Index standing in for `b`
    pub j: usize,
    /// Index standing in for `c`
    pub k: usize,
}

impl Triplet {
    pub fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }

    /// Resolve the indices to series values `[S[i], S[j], S[k]]`.
    pub fn values(&self, series: &Series) -> Result<[f64; 3]> {
        Ok([
            series.value_at(self.i)?,
            series.value_at(self.j)?,
            series.value_at(self.k)?,
        ])
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.i, self.j, self.k)
    }
}
