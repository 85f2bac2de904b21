//! Word lists used for stopword filtering and sentiment scoring.
//!
//! Lexicon files are plain text with one entry per line, encoded as
//! ISO-8859-1. An entry may carry a trailing `| comment` section (the
//! currency and geographic stopword lists do) and lines starting with `;`
//! are comments. Words are lowercased at load time so they compare equal to
//! the lowercased token stream.
//!
//! # Example
//!
//! ```rust,no_run
//! use lexiscore_core::{LexiconPaths, LexiconStore};
//!
//! let paths = LexiconPaths::in_dir("data");
//! let store = LexiconStore::load(&paths)?;
//! assert!(store.positive().contains("good"));
//! # Ok::<(), lexiscore_core::LexiscoreError>(())
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{LexiscoreError, Result};

/// An immutable set of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Loads a word set from an ISO-8859-1 encoded file.
    ///
    /// # Errors
    ///
    /// Returns [`LexiscoreError::FileNotFound`] if the file does not exist
    /// and [`LexiscoreError::Io`] if it cannot be read. A file without a
    /// single word is a [`LexiscoreError::LexiconError`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LexiscoreError::FileNotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path)?;
        let set = Self::parse(&decode_latin1(&bytes));
        if set.is_empty() {
            return Err(LexiscoreError::LexiconError { path: path.to_path_buf(), reason: "no words".to_string() });
        }
        tracing::debug!(path = %path.display(), words = set.len(), "loaded lexicon");
        Ok(set)
    }

    /// Parses lexicon text that has already been decoded.
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with(';'))
            .flat_map(|line| line.split('|').next().unwrap_or_default().split_whitespace())
            .map(str::to_lowercase)
            .collect();

        Self { words }
    }

    /// Builds a word set from a list of words, lowercasing each.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect() }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Returns the union of this set and `other`.
    pub fn union(&self, other: &WordSet) -> WordSet {
        Self { words: self.words.union(&other.words).cloned().collect() }
    }
}

/// ISO-8859-1 maps every byte onto the code point with the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// The stopword categories shipped with the standard lexicon layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopwordCategory {
    Auditor,
    Currencies,
    DatesAndNumbers,
    Generic,
    GenericLong,
    Geographic,
    Names,
}

impl StopwordCategory {
    pub const ALL: [StopwordCategory; 7] = [
        StopwordCategory::Auditor,
        StopwordCategory::Currencies,
        StopwordCategory::DatesAndNumbers,
        StopwordCategory::Generic,
        StopwordCategory::GenericLong,
        StopwordCategory::Geographic,
        StopwordCategory::Names,
    ];

    /// Conventional file name of this category's word list.
    pub fn file_name(self) -> &'static str {
        match self {
            StopwordCategory::Auditor => "StopWords_Auditor.txt",
            StopwordCategory::Currencies => "StopWords_Currencies.txt",
            StopwordCategory::DatesAndNumbers => "StopWords_DatesandNumbers.txt",
            StopwordCategory::Generic => "StopWords_Generic.txt",
            StopwordCategory::GenericLong => "StopWords_GenericLong.txt",
            StopwordCategory::Geographic => "StopWords_Geographic.txt",
            StopwordCategory::Names => "StopWords_Names.txt",
        }
    }
}

/// Locations of every lexicon file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconPaths {
    /// Stopword files, one per category, in [`StopwordCategory::ALL`] order.
    pub stopwords: Vec<(StopwordCategory, PathBuf)>,
    pub positive: PathBuf,
    pub negative: PathBuf,
}

impl LexiconPaths {
    const STOPWORDS_DIR: &'static str = "StopWords";
    const DICTIONARY_DIR: &'static str = "MasterDictionary";

    /// Derives the conventional layout under `base`:
    /// `StopWords/StopWords_<Category>.txt` and
    /// `MasterDictionary/{positive,negative}-words.txt`.
    pub fn in_dir<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref();
        let stopwords_dir = base.join(Self::STOPWORDS_DIR);
        let dictionary_dir = base.join(Self::DICTIONARY_DIR);

        Self {
            stopwords: StopwordCategory::ALL
                .iter()
                .map(|&category| (category, stopwords_dir.join(category.file_name())))
                .collect(),
            positive: dictionary_dir.join("positive-words.txt"),
            negative: dictionary_dir.join("negative-words.txt"),
        }
    }

    /// Picks the first base directory that holds the standard layout.
    ///
    /// Candidates in priority order: `custom`, the current directory, and
    /// the per-user data directory (`<data dir>/lexiscore`). Falls back to
    /// `custom` or the current directory so that loading reports the
    /// missing file.
    pub fn discover(custom: Option<&Path>) -> Self {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(dir) = custom {
            candidates.push(dir.to_path_buf());
        }
        candidates.push(PathBuf::from("."));
        if let Some(data_dir) = Self::default_data_dir() {
            candidates.push(data_dir);
        }

        let found = candidates
            .iter()
            .find(|dir| dir.join(Self::STOPWORDS_DIR).is_dir() && dir.join(Self::DICTIONARY_DIR).is_dir());

        match found {
            Some(dir) => Self::in_dir(dir),
            None => Self::in_dir(custom.unwrap_or_else(|| Path::new("."))),
        }
    }

    /// Per-user lexicon directory (`~/.local/share/lexiscore` on Linux).
    pub fn default_data_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("lexiscore"))
    }
}

/// All lexicons needed by the pipeline, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct LexiconStore {
    stopwords: Vec<(StopwordCategory, WordSet)>,
    all_stopwords: WordSet,
    positive: WordSet,
    negative: WordSet,
}

impl LexiconStore {
    /// Loads every file named by `paths`.
    ///
    /// Any missing or unreadable file fails the whole load.
    pub fn load(paths: &LexiconPaths) -> Result<Self> {
        let stopwords = paths
            .stopwords
            .iter()
            .map(|(category, path)| Ok((*category, WordSet::load(path)?)))
            .collect::<Result<Vec<_>>>()?;

        let store = Self::new(stopwords, WordSet::load(&paths.positive)?, WordSet::load(&paths.negative)?);
        tracing::info!(
            stopwords = store.all_stopwords.len(),
            positive = store.positive.len(),
            negative = store.negative.len(),
            "lexicons loaded"
        );
        Ok(store)
    }

    /// Assembles a store from already-built sets.
    pub fn new(stopwords: Vec<(StopwordCategory, WordSet)>, positive: WordSet, negative: WordSet) -> Self {
        let all_stopwords = stopwords
            .iter()
            .fold(WordSet::default(), |acc, (_, set)| acc.union(set));

        Self { stopwords, all_stopwords, positive, negative }
    }

    /// The stopword set of a single category, if it was loaded.
    pub fn category(&self, category: StopwordCategory) -> Option<&WordSet> {
        self.stopwords
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, set)| set)
    }

    /// Union of every stopword category.
    pub fn stopwords(&self) -> &WordSet {
        &self.all_stopwords
    }

    pub fn positive(&self) -> &WordSet {
        &self.positive
    }

    pub fn negative(&self) -> &WordSet {
        &self.negative
    }
}
