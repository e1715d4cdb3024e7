//! Pairing representation
//!
//! A Pairing holds the n/2 value pairs of a complete pairing of an even-length
//! sequence, along with the objective value (the maximum pair sum).

use std::fmt;

/// A complete pairing of an even-length integer sequence
///
/// Stores the value pairs in construction order. The objective value of a
/// pairing is the maximum pair sum; an empty pairing has objective value 0
/// (no pairs, no maximum).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pairs: Vec<(i64, i64)>,
}

/// Error type for sequences that cannot be completely paired
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    OddLength(usize),
}

impl fmt::Display for PairingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddLength(len) => {
                write!(f, "Sequence must have even length, got {len}")
            }
        }
    }
}

impl std::error::Error for PairingError {}

impl Pairing {
    /// Build the balanced pairing from an ascending-sorted slice
    ///
    /// Pairs `sorted[i]` with `sorted[n-1-i]` for each i in the lower half, so
    /// the largest values are spread across pairs rather than concentrated.
    ///
    /// # Errors
    /// Returns `PairingError::OddLength` if the slice has odd length.
    ///
    /// # Examples
    /// ```
    /// use pair_sum_solver::core::Pairing;
    ///
    /// let pairing = Pairing::balanced(&[2, 3, 3, 5]).unwrap();
    /// assert_eq!(pairing.pairs(), &[(2, 5), (3, 3)]);
    /// assert_eq!(pairing.max_sum(), 7);
    /// ```
    pub fn balanced(sorted: &[i64]) -> Result<Self, PairingError> {
        let n = sorted.len();
        if n % 2 != 0 {
            return Err(PairingError::OddLength(n));
        }

        let pairs = (0..n / 2).map(|i| (sorted[i], sorted[n - 1 - i])).collect();
        Ok(Self { pairs })
    }

    /// Build the adjacent pairing from an ascending-sorted slice
    ///
    /// Pairs sorted neighbors together: `(sorted[0], sorted[1])`,
    /// `(sorted[2], sorted[3])`, and so on. Concentrates the largest values
    /// in one pair, which maximizes the objective among sorted constructions.
    /// Used as the contrast case in analysis output.
    ///
    /// # Errors
    /// Returns `PairingError::OddLength` if the slice has odd length.
    pub fn adjacent(sorted: &[i64]) -> Result<Self, PairingError> {
        let n = sorted.len();
        if n % 2 != 0 {
            return Err(PairingError::OddLength(n));
        }

        let pairs = sorted.chunks_exact(2).map(|c| (c[0], c[1])).collect();
        Ok(Self { pairs })
    }

    /// Construct a pairing directly from value pairs
    ///
    /// Used by the brute-force enumerator, which builds pairings in arbitrary
    /// orders rather than from a sorted slice.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(i64, i64)>) -> Self {
        Self { pairs }
    }

    /// Get the value pairs in construction order
    #[inline]
    #[must_use]
    pub fn pairs(&self) -> &[(i64, i64)] {
        &self.pairs
    }

    /// Sum of each pair, in construction order
    #[must_use]
    pub fn pair_sums(&self) -> Vec<i64> {
        self.pairs.iter().map(|&(a, b)| a + b).collect()
    }

    /// The objective value: the maximum pair sum
    ///
    /// Returns 0 for an empty pairing.
    #[must_use]
    pub fn max_sum(&self) -> i64 {
        self.pairs.iter().map(|&(a, b)| a + b).max().unwrap_or(0)
    }

    /// Number of pairs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the pairing has no pairs
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (a, b)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({a}, {b})")?;
        }
        Ok(())
    }
}
