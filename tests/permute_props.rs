use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use remix::permute::{factorial, generate, next_permutation, sorted, upper_bound};

/// n! / (k1! * k2! * ...) for the letter multiplicities of `word`.
fn distinct_arrangements(word: &[char]) -> u64 {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for &c in word {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
        .values()
        .fold(factorial(word.len()).unwrap(), |acc, &k| acc / factorial(k).unwrap())
}

proptest! {
    #[test]
    fn visits_each_arrangement_once_in_order(word in "[a-d]{1,6}") {
        let chars: Vec<char> = word.chars().collect();
        let mut seq = sorted(&chars).chars().to_vec();
        let mut seen = vec![seq.clone()];
        while next_permutation(&mut seq) {
            seen.push(seq.clone());
        }

        prop_assert_eq!(seen.len() as u64, distinct_arrangements(&chars));
        prop_assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn partial_candidates_are_prefixes(word in "[a-e]{1,5}") {
        let chars: Vec<char> = word.chars().collect();
        let full = generate(&chars, false).unwrap();
        let partial = generate(&chars, true).unwrap();

        prop_assert_eq!(partial.len(), full.len() * chars.len());
        prop_assert!(partial.len() <= upper_bound(chars.len(), true).unwrap());

        let full: BTreeSet<_> = full.iter().map(|m| m.to_string()).collect();
        for candidate in &partial {
            let candidate = candidate.to_string();
            prop_assert!(full.iter().any(|f| f.starts_with(&candidate)));
        }
    }
}
