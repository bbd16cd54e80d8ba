//! The process-wide dictionary lives for the whole test binary, so these
//! tests sit in their own file and all agree on the same word list.

use remix::{dictionary, is_valid_word, remix, RemixError};

const WORDS: [&str; 4] = ["act", "cat", "dog", "god"];

#[test]
fn init_builds_once_and_is_shared() {
    let first = dictionary::init(WORDS);
    let second = dictionary::init(["ignored"]);

    assert!(std::ptr::eq(first, second));
    assert_eq!(first.len(), 4);
    assert!(is_valid_word("god"));
    assert!(!is_valid_word("ignored"));
}

#[test]
fn builder_falls_back_to_global_dictionary() {
    dictionary::init(WORDS);

    let results = remix("odg").threads(2).run().unwrap();
    let mut words = results.strings();
    words.sort();
    assert_eq!(words, ["dog", "god"]);
}

#[test]
fn global_is_visible_after_init() {
    dictionary::init(WORDS);
    let global = dictionary::global().unwrap();
    assert!(global.contains_str("act"));

    // an explicit empty-word request still fails before touching it
    assert!(matches!(remix("").run(), Err(RemixError::EmptyWord)));
}
