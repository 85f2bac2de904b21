//! Word and sentence segmentation.
//!
//! Both splitters follow the Unicode text segmentation rules (UAX #29)
//! through the `unicode-segmentation` crate. Sentence boundaries are
//! punctuation driven, so abbreviations such as "Dr. Smith" may split a
//! sentence in two. Whitespace runs, line breaks included, are collapsed
//! before segmenting; a paragraph wrapped over several lines stays one
//! sentence.

use unicode_segmentation::UnicodeSegmentation;

/// Splits `text` into word tokens, dropping whitespace and punctuation.
pub fn words(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

/// Splits `text` into sentences.
///
/// Only segments holding at least one alphanumeric character are returned,
/// trimmed of surrounding whitespace.
pub fn sentences(text: &str) -> Vec<String> {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");

    flat.unicode_sentences()
        .map(str::trim)
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .map(str::to_string)
        .collect()
}

/// Number of sentences in `text`.
pub fn count_sentences(text: &str) -> usize {
    sentences(text).len()
}
