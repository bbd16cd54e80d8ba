use crate::dictionary::Dictionary;
use crate::error::{RemixError, Stage};
use crate::mix::Mix;
use crate::pool::{run_pool, Acceptor, Placement};

/// Keeps the first copy of each distinct candidate.
///
/// The membership check runs in [`placement`](Acceptor::placement), under
/// the pool lock, as a binary search over the accepted set. Survivors are
/// inserted at their sorted position, so the set stays ordered for every
/// later search and no two workers can both admit the same string.
pub struct DuplicateFilter;

impl Acceptor for DuplicateFilter {
    fn accept(&self, _candidate: &Mix) -> bool {
        true
    }

    fn placement(&self, candidate: &Mix, accepted: &[Mix]) -> Placement {
        match accepted.binary_search(candidate) {
            Ok(_)  => Placement::Reject,
            Err(i) => Placement::Insert(i),
        }
    }
}

/// Accepts candidates that are words in the dictionary.
pub struct DictionaryTest<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> DictionaryTest<'d> {
    /// Test candidates against `dictionary`.
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }
}

impl Acceptor for DictionaryTest<'_> {
    fn accept(&self, candidate: &Mix) -> bool {
        self.dictionary.contains(candidate)
    }
}

/// Sort `candidates`, then drop repeats on a pool of `threads` workers.
///
/// The result is sorted and holds each distinct candidate once.
pub fn deduplicate(mut candidates: Vec<Mix>, threads: usize) -> Result<Vec<Mix>, RemixError> {
    candidates.sort_unstable();
    run_pool(candidates, &DuplicateFilter, threads, Stage::Deduplicate)
}
