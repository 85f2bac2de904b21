//! Sentiment and readability metrics.
//!
//! [`MetricsEngine::compute`] turns a normalized [`TokenSequence`] and the
//! raw article text into a [`MetricRecord`]:
//!
//! | Metric | Formula |
//! |---|---|
//! | positive score | tokens in the positive lexicon |
//! | negative score | tokens in the negative lexicon |
//! | polarity | `(pos - neg) / (pos + neg + 1e-6)` |
//! | subjectivity | `(pos + neg) / (words + 1e-6)` |
//! | avg sentence length | `round(words / sentences)`, `0` without sentences |
//! | % complex words | `complex / words * 100`, `0` without words |
//! | fog index | `0.4 * (avg sentence length + % complex words)` |
//! | syllables per word | `round(syllables / words)`, `0` without words |
//! | avg word length | `round(letters / words)`, `0` without words |
//!
//! Sentences are counted on the raw text; every other metric is computed on
//! the tokens. All rounding is round-half-to-even ([`round_half_even`]).
//! Every numeric field of a record is finite.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::lexicon::{LexiconStore, WordSet};
use crate::normalize::TokenSequence;
use crate::syllable::{count_syllables, is_complex};
use crate::tokenize;

/// Added to denominators so empty documents never divide by zero.
pub const SMOOTHING: f64 = 0.000001;

/// First and second person pronouns counted by the pronoun metric.
pub const PERSONAL_PRONOUNS: &[&str] = &["i", "me", "my", "we", "us", "our", "you", "your"];

/// Column titles of a report, in output order.
pub const REPORT_COLUMNS: [&str; 15] = [
    "URL_ID",
    "URL",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// Rounds to the nearest integer, ties to the even neighbour (`2.5 → 2`).
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// The metrics of one processed article.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub url_id: String,
    pub url: String,
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    /// Also reported as the average number of words per sentence.
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    pub syllables_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

impl MetricRecord {
    /// Average words per sentence; the same quantity as the average
    /// sentence length.
    pub fn avg_words_per_sentence(&self) -> f64 {
        self.avg_sentence_length
    }
}

impl Serialize for MetricRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let [id, url, pos, neg, polarity, subjectivity, asl, pct, fog, awps, complex, words, spw, pronouns, awl] =
            REPORT_COLUMNS;

        let mut state = serializer.serialize_struct("MetricRecord", REPORT_COLUMNS.len())?;
        state.serialize_field(id, &self.url_id)?;
        state.serialize_field(url, &self.url)?;
        state.serialize_field(pos, &self.positive_score)?;
        state.serialize_field(neg, &self.negative_score)?;
        state.serialize_field(polarity, &self.polarity_score)?;
        state.serialize_field(subjectivity, &self.subjectivity_score)?;
        state.serialize_field(asl, &self.avg_sentence_length)?;
        state.serialize_field(pct, &self.percentage_complex_words)?;
        state.serialize_field(fog, &self.fog_index)?;
        state.serialize_field(awps, &self.avg_words_per_sentence())?;
        state.serialize_field(complex, &self.complex_word_count)?;
        state.serialize_field(words, &self.word_count)?;
        state.serialize_field(spw, &self.syllables_per_word)?;
        state.serialize_field(pronouns, &self.personal_pronouns)?;
        state.serialize_field(awl, &self.avg_word_length)?;
        state.end()
    }
}

/// Scores token sequences against a pair of sentiment lexicons.
#[derive(Debug, Clone, Copy)]
pub struct MetricsEngine<'a> {
    positive: &'a WordSet,
    negative: &'a WordSet,
}

impl<'a> MetricsEngine<'a> {
    pub fn new(positive: &'a WordSet, negative: &'a WordSet) -> Self {
        Self { positive, negative }
    }

    pub fn from_store(store: &'a LexiconStore) -> Self {
        Self::new(store.positive(), store.negative())
    }

    /// Computes the metric record of one article.
    ///
    /// `tokens` is the normalized body and `raw_text` the body before
    /// normalization, used only to count sentences.
    pub fn compute(&self, tokens: &TokenSequence, raw_text: &str, url_id: &str, url: &str) -> MetricRecord {
        let word_count = tokens.len();
        let positive_score = tokens.iter().filter(|t| self.positive.contains(t)).count();
        let negative_score = tokens.iter().filter(|t| self.negative.contains(t)).count();
        let scored = (positive_score + negative_score) as f64;

        let polarity_score = (positive_score as f64 - negative_score as f64) / (scored + SMOOTHING);
        let subjectivity_score = scored / (word_count as f64 + SMOOTHING);

        let sentence_count = tokenize::count_sentences(raw_text);
        let avg_sentence_length = average(word_count, sentence_count);

        let complex_word_count = tokens.iter().filter(|t| is_complex(t)).count();
        let percentage_complex_words = if word_count > 0 {
            (complex_word_count as f64 / word_count as f64) * 100.0
        } else {
            0.0
        };
        let fog_index = 0.4 * (avg_sentence_length + percentage_complex_words);

        let syllables_per_word = average(tokens.iter().map(count_syllables).sum(), word_count);
        let personal_pronouns = tokens.iter().filter(|t| PERSONAL_PRONOUNS.contains(t)).count();
        let letters: usize = tokens.iter().map(|t| t.chars().count()).sum();
        let avg_word_length = average(letters, word_count);

        MetricRecord {
            url_id: url_id.to_string(),
            url: url.to_string(),
            positive_score,
            negative_score,
            polarity_score,
            subjectivity_score,
            avg_sentence_length,
            percentage_complex_words,
            fog_index,
            complex_word_count,
            word_count,
            syllables_per_word,
            personal_pronouns,
            avg_word_length,
        }
    }
}

/// `round(numerator / denominator)`, or `0` when the denominator is zero.
fn average(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 { 0.0 } else { round_half_even(numerator as f64 / denominator as f64) }
}
