use std::time::Instant;

use log::debug;

use crate::builder::MixConfig;
use crate::dictionary::Dictionary;
use crate::error::{RemixError, Stage};
use crate::filters::{deduplicate, DictionaryTest};
use crate::permute::generate;
use crate::pool::run_pool;
use crate::results::{MixStats, Results};

/// Find every dictionary word that is a mix of `word`.
///
/// Enumerates the arrangements of `word` (with all prefixes when
/// `config.allow_partial` is set), removes duplicates, and keeps the
/// candidates `dictionary` contains. The two filtering passes each run on
/// `config.threads` workers, one after the other.
///
/// Intermediate buffers belong to this call and are released when a stage
/// is done with them, or when an error cuts the call short.
///
/// # Errors
///
/// - [`RemixError::EmptyWord`] if `word` is empty.
/// - [`RemixError::NoDictionary`] if `dictionary` was never built.
/// - Any stage failure from enumeration or the pool passes.
pub fn mix(word: &[char], config: &MixConfig, dictionary: &Dictionary) -> Result<Results, RemixError> {
    if word.is_empty() {
        return Err(RemixError::EmptyWord);
    }
    if !dictionary.is_built() {
        return Err(RemixError::NoDictionary);
    }

    let start = Instant::now();

    let candidates = generate(word, config.allow_partial())?;
    let generated = candidates.len();

    let unique = deduplicate(candidates, config.threads())?;
    let unique_count = unique.len();

    let words = run_pool(unique, &DictionaryTest::new(dictionary), config.threads(), Stage::Lookup)?;
    let count = words.len();

    let duration = start.elapsed();
    debug!(
        "remix of {} letters: {} candidates, {} unique, {} words in {:?}",
        word.len(),
        generated,
        unique_count,
        count,
        duration
    );

    Ok(Results {
        words,
        count,
        stats: MixStats {
            candidates: generated,
            unique: unique_count,
            duration,
        },
    })
}
