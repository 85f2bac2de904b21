//! Rule-based English lemmatizer.
//!
//! Every token is treated as a noun, matching a general lemmatizer with no
//! part-of-speech tagging: plural forms collapse onto their singular and
//! everything else is left alone. Irregular plurals come from a lookup
//! table; regular plurals go through suffix rules guarded against words
//! that merely end in `s` ("glass", "status", "analysis", "famous").
//!
//! Lemmatizing a lemma returns it unchanged.

use std::collections::HashMap;
use std::sync::LazyLock;

static IRREGULAR: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("people", "person"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("lice", "louse"),
        ("oxen", "ox"),
        ("data", "datum"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("analyses", "analysis"),
        ("crises", "crisis"),
        ("theses", "thesis"),
        ("hypotheses", "hypothesis"),
        ("diagnoses", "diagnosis"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("leaves", "leaf"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("halves", "half"),
        ("selves", "self"),
        ("shelves", "shelf"),
        ("wolves", "wolf"),
        ("thieves", "thief"),
        ("loaves", "loaf"),
        ("calves", "calf"),
        ("quizzes", "quiz"),
    ]
    .into_iter()
    .collect()
});

/// Words ending in `s` that are not plurals.
const INVARIANT: &[&str] = &[
    "news",
    "series",
    "species",
    "means",
    "physics",
    "economics",
    "mathematics",
    "politics",
    "statistics",
    "ethics",
    "athletics",
    "lens",
    "always",
    "perhaps",
    "sometimes",
    "whereas",
    "besides",
    "towards",
    "afterwards",
    "upwards",
    "downwards",
    "does",
    "goes",
    "yes",
    "this",
    "thus",
    "plus",
    "was",
    "has",
    "is",
    "its",
    "his",
    "hers",
    "ours",
    "yours",
    "theirs",
    "whose",
    "those",
    "these",
];

/// Plurals in `-ies` whose singular ends in `-ie`.
const IE_NOUNS: &[&str] = &[
    "movies",
    "cookies",
    "calories",
    "pies",
    "ties",
    "lies",
    "zombies",
    "rookies",
    "brownies",
    "selfies",
    "hippies",
    "goalies",
    "genies",
    "prairies",
    "smoothies",
];

/// Plurals in `-ches` whose singular ends in `-che`.
const CHE_NOUNS: &[&str] = &["caches", "niches", "headaches", "avalanches", "moustaches", "cliches"];

/// Singular nouns in `-us` that pluralize with `-es`.
const US_NOUNS: &[&str] = &[
    "status",
    "virus",
    "campus",
    "bonus",
    "census",
    "chorus",
    "genius",
    "circus",
    "surplus",
    "bus",
    "prospectus",
    "consensus",
    "syllabus",
    "apparatus",
    "octopus",
    "walrus",
    "sinus",
    "nexus",
    "focus",
];

/// Singular nouns in `-as`, pluralized with `-es`.
const AS_NOUNS: &[&str] = &["bias", "gas", "alias", "canvas", "atlas", "pancreas", "christmas"];

/// Reduces `word` to its dictionary base form.
///
/// `word` is expected to be lowercase; other input is returned unchanged
/// where no rule applies.
pub fn lemmatize(word: &str) -> String {
    if let Some(lemma) = IRREGULAR.get(word) {
        return (*lemma).to_string();
    }
    if word.len() <= 3 || INVARIANT.contains(&word) {
        return word.to_string();
    }
    if IE_NOUNS.contains(&word) || CHE_NOUNS.contains(&word) {
        return word[..word.len() - 1].to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("es")
        && (stem.ends_with("ss")
            || US_NOUNS.contains(&stem)
            || AS_NOUNS.contains(&stem)
            || stem.ends_with("ch")
            || stem.ends_with("sh")
            || stem.ends_with('x')
            || stem.ends_with('z'))
    {
        return stem.to_string();
    }
    if word.ends_with('s') && !is_singular_s_ending(word) {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

fn is_singular_s_ending(word: &str) -> bool {
    AS_NOUNS.contains(&word) || ["ss", "us", "is", "ous"].iter().any(|suffix| word.ends_with(suffix))
}
