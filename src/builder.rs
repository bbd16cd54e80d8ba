use crate::dictionary::{self, Dictionary};
use crate::engine;
use crate::error::RemixError;
use crate::results::Results;

// ---------------------------------------------------------------------------
// MixConfig
// ---------------------------------------------------------------------------

/// Validated settings for one remix. Fixed once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixConfig {
    threads:       usize,
    allow_partial: bool,
}

impl MixConfig {
    /// # Errors
    ///
    /// [`RemixError::InvalidThreadCount`] if `threads` is zero.
    pub fn new(threads: usize, allow_partial: bool) -> Result<Self, RemixError> {
        if threads == 0 {
            return Err(RemixError::InvalidThreadCount(threads));
        }
        Ok(Self { threads, allow_partial })
    }

    /// Workers per filtering pass. Always at least one.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Whether every prefix length of each arrangement is a candidate too.
    pub fn allow_partial(&self) -> bool {
        self.allow_partial
    }
}

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            threads:       num_cpus(),
            allow_partial: false,
        }
    }
}

// ---------------------------------------------------------------------------
// RemixBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and running a remix.
///
/// Created via [`remix::remix()`](crate::remix). Configure with chained
/// builder methods, then call [`run()`](RemixBuilder::run).
///
/// # Example
///
/// ```rust
/// use remix::Dictionary;
///
/// let dictionary = Dictionary::from_words(["cat", "act", "at"]);
/// let results = remix::remix("tca")
///     .threads(2)
///     .dictionary(&dictionary)
///     .run()
///     .unwrap();
///
/// assert_eq!(results.count, 2);
/// ```
pub struct RemixBuilder<'d> {
    word:          Vec<char>,
    threads:       usize,
    allow_partial: bool,
    dictionary:    Option<&'d Dictionary>,
}

impl<'d> RemixBuilder<'d> {
    pub(crate) fn new(word: Vec<char>) -> Self {
        let defaults = MixConfig::default();
        Self {
            word,
            threads:       defaults.threads,
            allow_partial: defaults.allow_partial,
            dictionary:    None,
        }
    }

    /// Also try every prefix length of each arrangement.
    ///
    /// With `"act"` this adds candidates such as `"a"`, `"ac"`, `"ta"`.
    /// Off by default.
    pub fn partial(mut self, yes: bool) -> Self {
        self.allow_partial = yes;
        self
    }

    /// Number of worker threads for each filtering pass.
    ///
    /// Defaults to the number of logical CPU cores. Zero is rejected by
    /// [`run()`](RemixBuilder::run).
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = n;
        self
    }

    /// Check mixes against this dictionary instead of the process-wide one.
    pub fn dictionary(mut self, dictionary: &'d Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Run the remix and return the matching words.
    ///
    /// Blocks until both filtering passes finish.
    ///
    /// # Errors
    ///
    /// Returns `Err` for invalid configuration (empty word, zero threads,
    /// no usable dictionary) and for any stage failure. Finding no words is
    /// not an error.
    pub fn run(self) -> Result<Results, RemixError> {
        if self.word.is_empty() {
            return Err(RemixError::EmptyWord);
        }
        let config = MixConfig::new(self.threads, self.allow_partial)?;

        let dictionary = match self.dictionary {
            Some(d) => d,
            None    => dictionary::global().ok_or(RemixError::NoDictionary)?,
        };

        engine::mix(&self.word, &config, dictionary)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Get the logical CPU count, with a safe fallback.
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
