//! Candidate enumeration: the lexicographic permutation step, the factorial
//! bound used to size candidate buffers, and the generator that drives both.

use log::debug;

use crate::error::{RemixError, Stage};
use crate::mix::Mix;

// ---------------------------------------------------------------------------
// Bound calculator
// ---------------------------------------------------------------------------

const FACTORIALS: [u64; 20] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5_040,
    40_320,
    362_880,
    3_628_800,
    39_916_800,
    479_001_600,
    6_227_020_800,
    87_178_291_200,
    1_307_674_368_000,
    20_922_789_888_000,
    355_687_428_096_000,
    6_402_373_705_728_000,
    121_645_100_408_832_000,
];

/// `n!`, or `None` if it does not fit in a `u64`.
///
/// Table lookup for `n < 20`, repeated multiplication beyond that.
pub fn factorial(n: usize) -> Option<u64> {
    if let Some(&f) = FACTORIALS.get(n) {
        return Some(f);
    }
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// How many candidates enumeration of an `len`-letter word can produce.
///
/// Exact for full mode over distinct letters (`len!`). Partial mode slices
/// each arrangement into `len` prefixes, so the bound is `len! * len`.
/// With repeated letters this is only an upper bound, and a loose one:
/// thirteen copies of one letter have a single arrangement but still get
/// `13!` slots reserved, which may well fail as `ResourceExhausted`.
///
/// # Errors
///
/// [`RemixError::ResourceExhausted`] if the count does not fit in `usize`.
pub fn upper_bound(len: usize, partial: bool) -> Result<usize, RemixError> {
    let overflow = || RemixError::ResourceExhausted { stage: Stage::Bound, requested: None };

    let full = factorial(len).ok_or_else(overflow)?;
    let total = if partial {
        full.checked_mul(len as u64).ok_or_else(overflow)?
    } else {
        full
    };
    let bound = usize::try_from(total).map_err(|_| overflow())?;

    debug!("bound for {} letters (partial: {}): {}", len, partial, bound);
    Ok(bound)
}

// ---------------------------------------------------------------------------
// Permutation engine
// ---------------------------------------------------------------------------

/// Advance `seq` to its next lexicographic permutation, in place.
///
/// Returns `false` when `seq` was already the last (non-increasing)
/// arrangement; in that case it is reset to the first (sorted) one. Starting
/// from sorted input, repeated calls visit every distinct arrangement exactly
/// once, including when characters repeat.
pub fn next_permutation(seq: &mut [char]) -> bool {
    let n = seq.len();
    if n < 2 {
        return false;
    }

    // Left edge of the longest non-increasing suffix.
    let mut i = n - 1;
    while i > 0 && seq[i - 1] >= seq[i] {
        i -= 1;
    }
    if i == 0 {
        seq.reverse();
        return false;
    }

    // Rightmost element above the pivot; one exists since seq[i] > seq[i - 1].
    let mut j = n - 1;
    while seq[j] <= seq[i - 1] {
        j -= 1;
    }

    seq.swap(i - 1, j);
    seq[i..].reverse();
    true
}

/// The letters of `word` in non-decreasing order: the first permutation.
pub fn sorted(word: &[char]) -> Mix {
    let mut chars = word.to_vec();
    chars.sort_unstable();
    Mix::from(chars)
}

/// Enumerate every arrangement of `word`, each as its own owned [`Mix`].
///
/// In partial mode every arrangement also contributes all of its prefixes
/// (lengths `1..=len`), in increasing length. Prefixes repeat across
/// arrangements; duplicates are left for the duplicate pass.
///
/// # Errors
///
/// [`RemixError::ResourceExhausted`] if the bound overflows or the candidate
/// buffer cannot be reserved.
pub fn generate(word: &[char], partial: bool) -> Result<Vec<Mix>, RemixError> {
    let bound = upper_bound(word.len(), partial)?;

    let mut candidates = Vec::new();
    candidates
        .try_reserve_exact(bound)
        .map_err(|_| RemixError::exhausted(Stage::Generate, bound))?;

    let mut current = sorted(word);
    loop {
        if partial {
            candidates.extend((1..=current.len()).map(|len| current.prefix(len)));
        } else {
            candidates.push(current.clone());
        }
        if !next_permutation(current.chars_mut()) {
            break;
        }
    }

    debug!("generated {} candidates from {} letters", candidates.len(), word.len());
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn steps_through_abc_in_order() {
        let mut seq = chars("abc");
        let mut seen = vec![seq.iter().collect::<String>()];
        while next_permutation(&mut seq) {
            seen.push(seq.iter().collect());
        }
        assert_eq!(seen, ["abc", "acb", "bac", "bca", "cab", "cba"]);
        // wrapped back to the first arrangement
        assert_eq!(seq, chars("abc"));
    }

    #[test]
    fn repeated_letters_visit_distinct_arrangements_once() {
        let mut seq = chars("aab");
        let mut count = 1;
        while next_permutation(&mut seq) {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn short_sequences_have_no_successor() {
        assert!(!next_permutation(&mut []));
        assert!(!next_permutation(&mut ['x']));
    }

    #[test]
    fn factorial_table_and_fallback_agree() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(19), Some(121_645_100_408_832_000));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn bound_scales_with_length_in_partial_mode() {
        assert_eq!(upper_bound(4, false).unwrap(), 24);
        assert_eq!(upper_bound(4, true).unwrap(), 96);
        assert!(upper_bound(30, false).is_err());
    }

    #[test]
    fn bound_ignores_repeated_letters() {
        // one arrangement of "aaaa", but the bound is still 4!
        assert_eq!(upper_bound(4, false).unwrap(), 24);
        let candidates = generate(&chars("aaaa"), false).unwrap();
        assert_eq!(candidates.len(), 1);
        assert!(candidates.capacity() >= 24);
    }
}
