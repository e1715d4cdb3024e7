//! Sequence solving command
//!
//! Computes the minimized maximum pair sum for one input sequence and keeps
//! the intermediate steps around for display.

use crate::core::{Pairing, PairingError};
use crate::solver::{min_max_pair_sum, min_max_pair_sum_in_place, optimal_pairing};

/// Result of solving one sequence
pub struct SolveResult {
    pub input: Vec<i64>,
    pub sorted: Vec<i64>,
    pub pairing: Pairing,
    pub max_sum: i64,
}

/// Solve a sequence and record the sorted order and constructed pairing
///
/// # Errors
///
/// Returns `PairingError::OddLength` if the sequence has odd length.
pub fn solve_sequence(values: &[i64]) -> Result<SolveResult, PairingError> {
    let max_sum = min_max_pair_sum(values)?;
    let pairing = optimal_pairing(values)?;

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    Ok(SolveResult {
        input: values.to_vec(),
        sorted,
        pairing,
        max_sum,
    })
}

/// Solve a sequence, sorting the caller's buffer in place
///
/// Same result as [`solve_sequence`], but routes through the in-place solver:
/// on success the caller's slice is left sorted ascending instead of being
/// defensively copied. On error the slice is not modified.
///
/// # Errors
///
/// Returns `PairingError::OddLength` if the sequence has odd length.
pub fn solve_sequence_in_place(values: &mut [i64]) -> Result<SolveResult, PairingError> {
    let input = values.to_vec();
    let max_sum = min_max_pair_sum_in_place(values)?;
    // The slice is sorted now, so the balanced pairing reads straight off it
    let pairing = Pairing::balanced(values)?;

    Ok(SolveResult {
        input,
        sorted: values.to_vec(),
        pairing,
        max_sum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_records_all_steps() {
        let result = solve_sequence(&[3, 5, 2, 3]).unwrap();

        assert_eq!(result.input, vec![3, 5, 2, 3]);
        assert_eq!(result.sorted, vec![2, 3, 3, 5]);
        assert_eq!(result.pairing.pairs(), &[(2, 5), (3, 3)]);
        assert_eq!(result.max_sum, 7);
    }

    #[test]
    fn solve_pairing_achieves_max_sum() {
        let result = solve_sequence(&[4, 1, 5, 1, 2, 5]).unwrap();
        assert_eq!(result.pairing.max_sum(), result.max_sum);
        assert_eq!(result.max_sum, 6);
    }

    #[test]
    fn solve_empty_sequence() {
        let result = solve_sequence(&[]).unwrap();
        assert_eq!(result.max_sum, 0);
        assert!(result.pairing.is_empty());
    }

    #[test]
    fn solve_odd_length_returns_error() {
        let result = solve_sequence(&[1, 2, 3]);
        assert!(matches!(result, Err(PairingError::OddLength(3))));
    }

    #[test]
    fn solve_in_place_sorts_buffer_and_matches_pure_variant() {
        let mut values = vec![3, 5, 2, 3];
        let in_place = solve_sequence_in_place(&mut values).unwrap();
        let pure = solve_sequence(&[3, 5, 2, 3]).unwrap();

        // Caller's buffer is left sorted as the documented side effect
        assert_eq!(values, vec![2, 3, 3, 5]);

        assert_eq!(in_place.input, pure.input);
        assert_eq!(in_place.sorted, pure.sorted);
        assert_eq!(in_place.pairing, pure.pairing);
        assert_eq!(in_place.max_sum, pure.max_sum);
    }

    #[test]
    fn solve_in_place_odd_length_leaves_buffer_alone() {
        let mut values = vec![3, 1, 2];
        let result = solve_sequence_in_place(&mut values);
        assert!(matches!(result, Err(PairingError::OddLength(3))));
        assert_eq!(values, vec![3, 1, 2]);
    }
}
