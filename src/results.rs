use std::time::Duration;

use crate::mix::Mix;

/// The output of a completed remix.
///
/// An empty `words` list is a normal outcome: nothing matched.
#[derive(Debug)]
pub struct Results {
    /// Dictionary words found among the mixes. Order depends on scheduling.
    pub words: Vec<Mix>,

    /// `words.len()`, kept alongside for convenience.
    pub count: usize,

    /// Per-stage counts and timing.
    pub stats: MixStats,
}

impl Results {
    /// The matched words as owned strings, in the same order as `words`.
    pub fn strings(&self) -> Vec<String> {
        self.words.iter().map(Mix::to_string).collect()
    }
}

/// Statistics for a completed remix.
#[derive(Debug, Clone, Copy)]
pub struct MixStats {
    /// Candidates produced by enumeration, before any filtering.
    pub candidates: usize,

    /// Candidates left after duplicate elimination.
    pub unique: usize,

    /// Wall-clock time from start to completion.
    pub duration: Duration,
}
