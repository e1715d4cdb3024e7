//! Sequence analysis command
//!
//! Analyzes how evenly the balanced pairing spreads the pair sums, and how
//! much it saves over concentrating large values together.

use crate::core::{Pairing, PairingError};
use rustc_hash::FxHashMap;

/// Result of analyzing a sequence
pub struct AnalysisResult {
    pub total_pairs: usize,
    pub balanced_max: i64,
    pub balanced_min: i64,
    /// Spread between the largest and smallest balanced pair sum; 0 means the
    /// pairing is perfectly level
    pub spread: i64,
    /// Objective of the adjacent pairing (sorted neighbors paired together)
    pub adjacent_max: i64,
    /// How much the balanced pairing lowers the objective vs the adjacent one
    pub savings: i64,
    /// Count of balanced pairs per pair-sum value
    pub sum_distribution: FxHashMap<i64, usize>,
}

/// Analyze the balanced pairing of a sequence
///
/// # Errors
///
/// Returns `PairingError::OddLength` if the sequence has odd length.
pub fn analyze_sequence(values: &[i64]) -> Result<AnalysisResult, PairingError> {
    let mut sorted = values.to_vec();
    if sorted.len() % 2 != 0 {
        return Err(PairingError::OddLength(sorted.len()));
    }
    sorted.sort_unstable();

    let balanced = Pairing::balanced(&sorted)?;
    let adjacent = Pairing::adjacent(&sorted)?;

    let sums = balanced.pair_sums();
    let balanced_max = balanced.max_sum();
    let balanced_min = sums.iter().copied().min().unwrap_or(0);

    let mut sum_distribution: FxHashMap<i64, usize> = FxHashMap::default();
    for sum in &sums {
        *sum_distribution.entry(*sum).or_insert(0) += 1;
    }

    let adjacent_max = adjacent.max_sum();

    Ok(AnalysisResult {
        total_pairs: balanced.len(),
        balanced_max,
        balanced_min,
        spread: balanced_max - balanced_min,
        adjacent_max,
        savings: adjacent_max - balanced_max,
        sum_distribution,
    })
}
