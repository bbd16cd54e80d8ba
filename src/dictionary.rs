use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use log::debug;

use crate::error::RemixError;
use crate::mix::Mix;

/// The set of valid words, organised for exact lookup.
///
/// Built at most once: the first [`build`](Dictionary::build) fills it and
/// later calls do nothing. After that it is read-only, so any number of
/// workers may query it at the same time without locking.
#[derive(Debug, Default)]
pub struct Dictionary {
    words: OnceLock<BTreeSet<Mix>>,
}

impl Dictionary {
    /// An empty, not-yet-built dictionary.
    pub const fn new() -> Self {
        Self { words: OnceLock::new() }
    }

    /// Build and return a dictionary in one step.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = Self::new();
        dictionary.build(words);
        dictionary
    }

    /// Read a newline-separated word list. Surrounding whitespace is trimmed
    /// and blank lines are skipped.
    ///
    /// # Errors
    ///
    /// [`RemixError::Io`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RemixError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| RemixError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_words(
            contents.lines().map(str::trim).filter(|w| !w.is_empty()),
        ))
    }

    /// Index `words`. A no-op if this dictionary was already built,
    /// even when racing other threads for the first build.
    pub fn build<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fresh = false;
        let index = self.words.get_or_init(|| {
            fresh = true;
            words.into_iter().map(|w| Mix::from(w.as_ref())).collect()
        });
        if fresh {
            debug!("dictionary built with {} words", index.len());
        } else {
            debug!("dictionary already built");
        }
    }

    /// Whether [`build`](Dictionary::build) has run.
    pub fn is_built(&self) -> bool {
        self.words.get().is_some()
    }

    /// Exact-match lookup. Always `false` on an unbuilt dictionary.
    pub fn contains(&self, word: &Mix) -> bool {
        self.words.get().is_some_and(|words| words.contains(word))
    }

    /// [`contains`](Dictionary::contains) for a string slice.
    pub fn contains_str(&self, word: &str) -> bool {
        self.contains(&Mix::from(word))
    }

    /// Number of distinct words indexed.
    pub fn len(&self) -> usize {
        self.words.get().map_or(0, BTreeSet::len)
    }

    /// `true` when unbuilt or built from no words.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Process-wide dictionary
// ---------------------------------------------------------------------------

static GLOBAL: Dictionary = Dictionary::new();

/// Build the process-wide dictionary from `words` and return it.
///
/// Only the first call has any effect; every later call, from any thread,
/// returns the dictionary built by that first one.
pub fn init<I, S>(words: I) -> &'static Dictionary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    GLOBAL.build(words);
    &GLOBAL
}

/// The process-wide dictionary, if [`init`] has run.
pub fn global() -> Option<&'static Dictionary> {
    GLOBAL.is_built().then_some(&GLOBAL)
}

/// Whether `word` is in the process-wide dictionary.
/// `false` if it was never initialised.
pub fn is_valid_word(word: &str) -> bool {
    GLOBAL.contains_str(word)
}
