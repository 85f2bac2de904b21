//! Text normalization: the token stream consumed by scoring.
//!
//! Normalization runs five steps over the raw article body:
//!
//! 1. lowercase the whole text
//! 2. collapse every run of non `[a-zA-Z]` characters into one space and trim
//! 3. split into word tokens
//! 4. lemmatize each token
//! 5. drop tokens whose surface form or lemma is a stopword (see [`StopwordMode`])
//!
//! # Example
//!
//! ```rust
//! use lexiscore_core::{Normalizer, StopwordMode, WordSet};
//!
//! let stopwords = WordSet::from_words(["the", "a"]);
//! let normalizer = Normalizer::new(&stopwords, StopwordMode::Filter, true);
//! let tokens = normalizer.normalize("The cats chased a mouse, 3 times!").unwrap();
//! assert_eq!(tokens.as_slice(), ["cat", "chased", "mouse", "time"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::lemmatize::lemmatize;
use crate::lexicon::WordSet;
use crate::tokenize;
use crate::{LexiscoreError, Result};

static NON_ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z]+").expect("valid regex"));

/// How stopwords are treated during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwordMode {
    /// Remove every token found in the union of stopword categories.
    #[default]
    Filter,
    /// Keep every token. Scores then match reports produced without
    /// stopword removal.
    Passthrough,
}

/// An ordered sequence of lowercase alphabetic tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    /// Joins the tokens back into space separated text.
    pub fn to_text(&self) -> String {
        self.tokens.join(" ")
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { tokens: iter.into_iter().map(Into::into).collect() }
    }
}

/// Turns raw article text into a [`TokenSequence`].
#[derive(Debug, Clone)]
pub struct Normalizer<'a> {
    stopwords: &'a WordSet,
    mode: StopwordMode,
    lemmatize: bool,
}

impl<'a> Normalizer<'a> {
    pub fn new(stopwords: &'a WordSet, mode: StopwordMode, lemmatize: bool) -> Self {
        Self { stopwords, mode, lemmatize }
    }

    /// Normalizes `raw` into lemmatized, non-stopword tokens.
    ///
    /// # Errors
    ///
    /// Returns [`LexiscoreError::ProcessingError`] if a token survives
    /// cleaning with characters outside `a-z`.
    pub fn normalize(&self, raw: &str) -> Result<TokenSequence> {
        let cleaned = clean(raw);

        let mut kept = Vec::new();
        for token in tokenize::words(&cleaned) {
            let base = self.base_form(token)?;
            // Both forms are checked so a lemma that is itself a stopword
            // never survives.
            if self.keep(token) && self.keep(&base) {
                kept.push(base);
            }
        }
        let tokens = TokenSequence::new(kept);

        tracing::debug!(
            input_chars = raw.len(),
            tokens = tokens.len(),
            mode = ?self.mode,
            "normalized document"
        );

        Ok(tokens)
    }

    fn keep(&self, token: &str) -> bool {
        match self.mode {
            StopwordMode::Filter => !self.stopwords.contains(token),
            StopwordMode::Passthrough => true,
        }
    }

    fn base_form(&self, token: &str) -> Result<String> {
        if !token.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(LexiscoreError::ProcessingError(format!(
                "unexpected token after cleaning: {token:?}"
            )));
        }

        Ok(if self.lemmatize { lemmatize(token) } else { token.to_string() })
    }
}

/// Lowercases `raw` and replaces non-letter runs with single spaces.
pub fn clean(raw: &str) -> String {
    let lower = raw.to_lowercase();
    NON_ALPHA.replace_all(&lower, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> WordSet {
        WordSet::default()
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("Hello, World! 2024"), "hello world");
        assert_eq!(clean("  --- "), "");
        assert_eq!(clean("naïve café"), "na ve caf");
        assert_eq!(clean("e-mail"), "e mail");
    }

    #[test]
    fn test_normalize_lowercases_and_strips() {
        let stopwords = empty();
        let normalizer = Normalizer::new(&stopwords, StopwordMode::Filter, false);
        let tokens = normalizer.normalize("Rust's 2nd Edition, released!").unwrap();
        assert_eq!(tokens.as_slice(), ["rust", "s", "nd", "edition", "released"]);
    }

    #[test]
    fn test_filter_removes_stopwords() {
        let stopwords = WordSet::from_words(["the", "of"]);
        let normalizer = Normalizer::new(&stopwords, StopwordMode::Filter, false);
        let tokens = normalizer.normalize("The rise of the markets").unwrap();
        assert_eq!(tokens.as_slice(), ["rise", "markets"]);
    }

    #[test]
    fn test_passthrough_keeps_stopwords() {
        let stopwords = WordSet::from_words(["the", "of"]);
        let normalizer = Normalizer::new(&stopwords, StopwordMode::Passthrough, false);
        let tokens = normalizer.normalize("The rise of the markets").unwrap();
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_stopwords_filtered_on_lemma() {
        let stopwords = WordSet::from_words(["market"]);
        let normalizer = Normalizer::new(&stopwords, StopwordMode::Filter, true);
        let tokens = normalizer.normalize("market markets rally").unwrap();
        assert_eq!(tokens.as_slice(), ["rally"]);
    }

    #[test]
    fn test_stopwords_filtered_on_surface_without_lemmatizing() {
        let stopwords = WordSet::from_words(["market"]);
        let normalizer = Normalizer::new(&stopwords, StopwordMode::Filter, false);
        let tokens = normalizer.normalize("market markets").unwrap();
        assert_eq!(tokens.as_slice(), ["markets"]);
    }

    #[test]
    fn test_lemmatizes() {
        let stopwords = empty();
        let normalizer = Normalizer::new(&stopwords, StopwordMode::Filter, true);
        let tokens = normalizer.normalize("Companies report losses").unwrap();
        assert_eq!(tokens.as_slice(), ["company", "report", "loss"]);
    }

    #[test]
    fn test_empty_input() {
        let stopwords = empty();
        let normalizer = Normalizer::new(&stopwords, StopwordMode::Filter, true);
        assert!(normalizer.normalize("").unwrap().is_empty());
        assert!(normalizer.normalize("123 !!! 456").unwrap().is_empty());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let stopwords = WordSet::from_words(["the", "and", "of"]);
        let normalizer = Normalizer::new(&stopwords, StopwordMode::Filter, true);
        let once = normalizer
            .normalize("The Children of the villages, and their wolves, ran across 3 fields.")
            .unwrap();
        let twice = normalizer.normalize(&once.to_text()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_is_idempotent_for_plural_stopwords() {
        let stopwords = WordSet::from_words(["dollar", "thousand"]);
        let normalizer = Normalizer::new(&stopwords, StopwordMode::Filter, true);
        let once = normalizer.normalize("2 million dollars, thousands of them").unwrap();
        assert_eq!(once.as_slice(), ["million", "of", "them"]);

        let twice = normalizer.normalize(&once.to_text()).unwrap();
        assert_eq!(once, twice);
    }
}
