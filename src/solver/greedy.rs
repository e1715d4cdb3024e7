//! Greedy balanced-pairing solver
//!
//! Sorting ascending and pairing the smallest remaining value with the largest
//! remaining value minimizes the maximum pair sum. The exchange argument: the
//! largest value must land in some pair, and giving it the smallest partner
//! makes that pair's sum as small as possible; any pairing that puts two large
//! values together can be improved (or left unchanged) by swapping partners to
//! spread them across pairs. Repeating the argument on the remaining values
//! yields the balanced pairing.

use crate::core::{Pairing, PairingError};

/// Minimize the maximum pair sum over all complete pairings
///
/// Takes a defensive copy of the input, so the caller's slice is never
/// mutated. Costs O(n log n) time and O(n) extra space for the copy; use
/// [`min_max_pair_sum_in_place`] to trade the copy for in-place sorting.
///
/// Returns 0 for an empty sequence (no pairs, no maximum).
///
/// # Errors
/// Returns `PairingError::OddLength` if the sequence has odd length.
///
/// # Examples
/// ```
/// use pair_sum_solver::solver::min_max_pair_sum;
///
/// let values = vec![3, 5, 2, 3];
/// assert_eq!(min_max_pair_sum(&values).unwrap(), 7);
/// // Caller's data is untouched
/// assert_eq!(values, vec![3, 5, 2, 3]);
/// ```
pub fn min_max_pair_sum(values: &[i64]) -> Result<i64, PairingError> {
    let mut sorted = values.to_vec();
    min_max_pair_sum_in_place(&mut sorted)
}

/// Minimize the maximum pair sum, sorting the caller's slice in place
///
/// Side effect: on success the slice is left sorted ascending. Do not hand a
/// shared slice to this variant if other holders rely on its order. O(1)
/// extra space.
///
/// # Errors
/// Returns `PairingError::OddLength` if the sequence has odd length; the
/// slice is not modified in that case.
pub fn min_max_pair_sum_in_place(values: &mut [i64]) -> Result<i64, PairingError> {
    let n = values.len();
    if n % 2 != 0 {
        return Err(PairingError::OddLength(n));
    }

    values.sort_unstable();

    let max_sum = (0..n / 2)
        .map(|i| values[i] + values[n - 1 - i])
        .max()
        .unwrap_or(0);
    Ok(max_sum)
}

/// Materialize the balanced pairing that achieves the minimized maximum
///
/// The returned pairing's [`max_sum`](Pairing::max_sum) equals
/// [`min_max_pair_sum`] on the same input. The caller's slice is not mutated.
///
/// # Errors
/// Returns `PairingError::OddLength` if the sequence has odd length.
pub fn optimal_pairing(values: &[i64]) -> Result<Pairing, PairingError> {
    let mut sorted = values.to_vec();
    if sorted.len() % 2 != 0 {
        return Err(PairingError::OddLength(sorted.len()));
    }
    sorted.sort_unstable();
    Pairing::balanced(&sorted)
}
