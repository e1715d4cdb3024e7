//! Brute-force pairing enumeration
//!
//! Enumerates every complete pairing of a small sequence to find the true
//! minimum of the maximum pair sum. There are (n-1)!! pairings of n elements
//! (3 for n=4, 15 for n=6, 105 for n=8), so callers keep n small; the
//! functions themselves place no limit.

use crate::core::{Pairing, PairingError};

/// Minimum over all pairings of the maximum pair sum, by exhaustive search
///
/// Exists to cross-check the greedy solver; never use it as the production
/// path. Returns 0 for an empty sequence.
///
/// # Errors
/// Returns `PairingError::OddLength` if the sequence has odd length.
pub fn brute_force_min_max_pair_sum(values: &[i64]) -> Result<i64, PairingError> {
    if values.len() % 2 != 0 {
        return Err(PairingError::OddLength(values.len()));
    }
    if values.is_empty() {
        return Ok(0);
    }

    let mut remaining = values.to_vec();
    let mut best = None;
    // i64::MIN start so all-negative pair sums survive the running max
    search(&mut remaining, i64::MIN, &mut best);
    Ok(best.unwrap_or(0))
}

/// Enumerate every complete pairing of the sequence
///
/// Produces all (n-1)!! pairings. Used by property tests that need the full
/// pairing set rather than just the optimum.
///
/// # Errors
/// Returns `PairingError::OddLength` if the sequence has odd length.
pub fn all_pairings(values: &[i64]) -> Result<Vec<Pairing>, PairingError> {
    if values.len() % 2 != 0 {
        return Err(PairingError::OddLength(values.len()));
    }

    let mut remaining = values.to_vec();
    let mut current = Vec::with_capacity(values.len() / 2);
    let mut out = Vec::new();
    collect(&mut remaining, &mut current, &mut out);
    Ok(out)
}

/// Recursively pair off the first remaining element with each other element,
/// tracking the running maximum pair sum and keeping the best completed one.
fn search(remaining: &mut Vec<i64>, current_max: i64, best: &mut Option<i64>) {
    if remaining.is_empty() {
        let candidate = match best {
            Some(b) => current_max.min(*b),
            None => current_max,
        };
        *best = Some(candidate);
        return;
    }

    // Prune: the running maximum can only grow
    if best.is_some_and(|b| current_max >= b) {
        return;
    }

    let first = remaining.swap_remove(0);
    for i in 0..remaining.len() {
        let partner = remaining.swap_remove(i);
        search(remaining, current_max.max(first + partner), best);
        // swap_remove moved the last element into slot i; undo both removals
        remaining.push(partner);
        let last = remaining.len() - 1;
        remaining.swap(i, last);
    }
    remaining.push(first);
    let last = remaining.len() - 1;
    remaining.swap(0, last);
}

fn collect(remaining: &mut Vec<i64>, current: &mut Vec<(i64, i64)>, out: &mut Vec<Pairing>) {
    if remaining.is_empty() {
        out.push(Pairing::from_pairs(current.clone()));
        return;
    }

    let first = remaining.swap_remove(0);
    for i in 0..remaining.len() {
        let partner = remaining.swap_remove(i);
        current.push((first, partner));
        collect(remaining, current, out);
        current.pop();
        remaining.push(partner);
        let last = remaining.len() - 1;
        remaining.swap(i, last);
    }
    remaining.push(first);
    let last = remaining.len() - 1;
    remaining.swap(0, last);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::min_max_pair_sum;

    #[test]
    fn pairing_counts_are_double_factorials() {
        assert_eq!(all_pairings(&[1, 2]).unwrap().len(), 1);
        assert_eq!(all_pairings(&[1, 2, 3, 4]).unwrap().len(), 3);
        assert_eq!(all_pairings(&[1, 2, 3, 4, 5, 6]).unwrap().len(), 15);
        assert_eq!(all_pairings(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap().len(), 105);
    }

    #[test]
    fn every_pairing_covers_every_element() {
        let values = [4, 1, 5, 1, 2, 5];
        for pairing in all_pairings(&values).unwrap() {
            assert_eq!(pairing.len(), 3);
            let mut seen: Vec<i64> = pairing
                .pairs()
                .iter()
                .flat_map(|&(a, b)| [a, b])
                .collect();
            seen.sort_unstable();
            let mut expected = values.to_vec();
            expected.sort_unstable();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn brute_force_matches_worked_examples() {
        assert_eq!(brute_force_min_max_pair_sum(&[3, 5, 2, 3]).unwrap(), 7);
        assert_eq!(brute_force_min_max_pair_sum(&[1, 1, 1, 1]).unwrap(), 2);
        assert_eq!(
            brute_force_min_max_pair_sum(&[1, 2, 3, 4, 5, 6]).unwrap(),
            7
        );
        assert_eq!(
            brute_force_min_max_pair_sum(&[4, 1, 5, 1, 2, 5]).unwrap(),
            6
        );
    }

    #[test]
    fn brute_force_empty_and_odd() {
        assert_eq!(brute_force_min_max_pair_sum(&[]).unwrap(), 0);
        assert!(matches!(
            brute_force_min_max_pair_sum(&[1, 2, 3]),
            Err(PairingError::OddLength(3))
        ));
        assert!(all_pairings(&[1, 2, 3]).is_err());
    }

    #[test]
    fn greedy_is_lower_bound_over_all_pairings() {
        // The greedy answer must be <= the objective of every pairing,
        // checked exhaustively up to n = 8
        let cases: [&[i64]; 5] = [
            &[3, 5, 2, 3],
            &[1, 4, 3, 2],
            &[4, 1, 5, 1, 2, 5],
            &[-3, 7, 0, 2, 9, -1],
            &[8, 8, 1, 1, 5, 5, 3, 3],
        ];

        for values in cases {
            let greedy = min_max_pair_sum(values).unwrap();
            for pairing in all_pairings(values).unwrap() {
                assert!(
                    greedy <= pairing.max_sum(),
                    "greedy {greedy} beaten by pairing {pairing} on {values:?}"
                );
            }
        }
    }

    #[test]
    fn greedy_matches_brute_force() {
        let cases: [&[i64]; 4] = [
            &[3, 5, 2, 3],
            &[1, 2, 3, 4, 5, 6],
            &[-5, -1, -3, -7],
            &[10, 0, 10, 0, 10, 0, 10, 0],
        ];

        for values in cases {
            assert_eq!(
                min_max_pair_sum(values).unwrap(),
                brute_force_min_max_pair_sum(values).unwrap(),
                "mismatch on {values:?}"
            );
        }
    }
}
