#![no_main]

use libfuzzer_sys::fuzz_target;
use wordsearch::utils::{extract_words, file_identifier, normalize};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Normalized text never keeps stripped punctuation or double spaces
    let normalized = normalize(&text);
    assert!(!normalized.contains("  "));
    assert!(!normalized.contains(['.', ',', '!', '"', '\'', '?', '(', ')']));

    for word in extract_words(&text, false) {
        assert!(!word.is_empty());
        assert!(!word.contains(' '));
    }

    let id = file_identifier(&text);
    assert!(text.starts_with(id));
});
