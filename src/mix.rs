use std::fmt::{self, Write};

/// One candidate word: an owned, fixed-length run of characters.
///
/// Every stage of a remix owns its `Mix` values outright. Generation hands
/// them to the duplicate pass, survivors move on to the dictionary pass, and
/// anything rejected is dropped on the spot by whichever worker held it.
/// Nothing is ever shared between two stages.
///
/// Ordering is plain code-point lexicographic order over the characters, so
/// a sorted `Vec<Mix>` is sorted the same way a sorted `Vec<String>` would be.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mix {
    chars: Box<[char]>,
}

impl Mix {
    /// Build a mix from a character slice.
    pub fn from_chars(chars: &[char]) -> Self {
        Self { chars: chars.into() }
    }

    /// The characters of this mix.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Mutable access for in-place permutation.
    pub(crate) fn chars_mut(&mut self) -> &mut [char] {
        &mut self.chars
    }

    /// A new mix holding the first `len` characters.
    pub fn prefix(&self, len: usize) -> Self {
        Self::from_chars(&self.chars[..len.min(self.chars.len())])
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for Mix {
    fn from(s: &str) -> Self {
        Self { chars: s.chars().collect() }
    }
}

impl From<Vec<char>> for Mix {
    fn from(chars: Vec<char>) -> Self {
        Self { chars: chars.into_boxed_slice() }
    }
}

impl fmt::Display for Mix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in self.chars.iter() {
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl PartialEq<str> for Mix {
    fn eq(&self, other: &str) -> bool {
        self.chars.iter().copied().eq(other.chars())
    }
}

impl PartialEq<&str> for Mix {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
