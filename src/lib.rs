//! # remix
//!
//! Find every dictionary word hidden in the letters of another word.
//!
//! remix enumerates each distinct rearrangement ("mix") of a word's letters,
//! optionally together with every prefix of each rearrangement, removes the
//! duplicates that repeated letters produce, and keeps the mixes found in a
//! [`Dictionary`]. Both filtering passes run on a small pool of worker
//! threads that drain a shared candidate list.
//!
//! # Quick Start
//!
//! ```rust
//! use remix::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["act", "cat", "at", "ca"]);
//!
//! let results = remix::remix("tac")
//!     .dictionary(&dictionary)
//!     .threads(4)
//!     .run()
//!     .unwrap();
//!
//! let mut words = results.strings();
//! words.sort();
//! assert_eq!(words, ["act", "cat"]);
//! println!("{} candidates, {} unique, {:.3}s",
//!     results.stats.candidates,
//!     results.stats.unique,
//!     results.stats.duration.as_secs_f64()
//! );
//! ```
//!
//! # Partial mixes
//!
//! With `.partial(true)` every prefix length of each arrangement is a
//! candidate as well, so shorter words turn up too:
//!
//! ```rust
//! use remix::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["at", "act", "ca"]);
//! let results = remix::remix("act")
//!     .partial(true)
//!     .dictionary(&dictionary)
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(results.count, 3);
//! ```
//!
//! # Custom acceptance tests
//!
//! The worker pool is generic over an [`Acceptor`]:
//!
//! ```rust
//! use remix::{pool::run_pool, Acceptor, Mix, Stage};
//!
//! struct StartsWith(char);
//!
//! impl Acceptor for StartsWith {
//!     fn accept(&self, candidate: &Mix) -> bool {
//!         candidate.chars().first() == Some(&self.0)
//!     }
//! }
//!
//! let candidates = vec![Mix::from("cat"), Mix::from("act"), Mix::from("cab")];
//! let kept = run_pool(candidates, &StartsWith('c'), 2, Stage::Lookup).unwrap();
//! assert_eq!(kept.len(), 2);
//! ```

#![forbid(unsafe_code)]

pub mod dictionary;
pub mod permute;
pub mod pool;

mod builder;
mod engine;
mod error;
mod filters;
mod mix;
mod results;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::{MixConfig, RemixBuilder};
pub use dictionary::{is_valid_word, Dictionary};
pub use engine::mix;
pub use error::{ErrorKind, RemixError, Stage};
pub use filters::{deduplicate, DictionaryTest, DuplicateFilter};
pub use mix::Mix;
pub use pool::{Acceptor, Placement};
pub use results::{MixStats, Results};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`RemixBuilder`] for `word`.
///
/// # Example
///
/// ```rust
/// use remix::Dictionary;
///
/// let dictionary = Dictionary::from_words(["aaa"]);
/// let results = remix::remix("aaa").dictionary(&dictionary).run().unwrap();
///
/// assert_eq!(results.stats.unique, 1);
/// assert_eq!(results.strings(), ["aaa"]);
/// ```
pub fn remix<'d>(word: &str) -> RemixBuilder<'d> {
    RemixBuilder::new(word.chars().collect())
}
