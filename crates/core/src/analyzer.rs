//! Main scoring API.
//!
//! The entry point is the [`Analyzer`], which owns the loaded lexicons and
//! turns article text, or a batch of input rows, into metric records.
//!
//! # Example
//!
//! ```rust
//! use lexiscore_core::{Analyzer, AnalyzerConfig, LexiconStore, StopwordMode, WordSet};
//!
//! let lexicons = LexiconStore::new(Vec::new(), WordSet::from_words(["gain"]), WordSet::from_words(["loss"]));
//! let config = AnalyzerConfig::builder().stopword_mode(StopwordMode::Passthrough).build();
//! let analyzer = Analyzer::with_config(lexicons, config);
//!
//! let record = analyzer.analyze_text("Gains beat losses. Another gain.", "1", "https://example.com").unwrap();
//! assert_eq!(record.positive_score, 2);
//! assert_eq!(record.negative_score, 1);
//! ```

use std::path::PathBuf;

use crate::lexicon::LexiconStore;
use crate::metrics::{MetricRecord, MetricsEngine};
use crate::normalize::{Normalizer, StopwordMode};
use crate::report::{InputRow, Report, write_text_artifact};
use crate::source::ArticleSource;
use crate::{ErrorKind, LexiscoreError, Result};

/// Configuration for the Analyzer.
///
/// # Example
///
/// ```rust
/// use lexiscore_core::{AnalyzerConfig, StopwordMode};
///
/// let config = AnalyzerConfig::builder()
///     .stopword_mode(StopwordMode::Passthrough)
///     .lemmatize(false)
///     .text_dir("text_files")
///     .build();
/// assert!(!config.lemmatize);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// How stopwords are treated (default: [`StopwordMode::Filter`]).
    pub stopword_mode: StopwordMode,

    /// Whether tokens are lemmatized (default: true).
    pub lemmatize: bool,

    /// Directory receiving one `<URL_ID>.txt` per processed article
    /// (default: none).
    pub text_dir: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { stopword_mode: StopwordMode::Filter, lemmatize: true, text_dir: None }
    }
}

impl AnalyzerConfig {
    /// Creates a new builder for AnalyzerConfig.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }
}

/// Builder for AnalyzerConfig.
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Sets the stopword mode.
    pub fn stopword_mode(mut self, value: StopwordMode) -> Self {
        self.config.stopword_mode = value;
        self
    }

    /// Sets whether tokens are lemmatized.
    pub fn lemmatize(mut self, value: bool) -> Self {
        self.config.lemmatize = value;
        self
    }

    /// Sets the text artifact directory.
    pub fn text_dir<P: Into<PathBuf>>(mut self, value: P) -> Self {
        self.config.text_dir = Some(value.into());
        self
    }

    /// Builds the config.
    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A row that could not be scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    pub url_id: String,
    pub url: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl RowFailure {
    fn new(row: &InputRow, error: &LexiscoreError) -> Self {
        Self { url_id: row.url_id.clone(), url: row.url.clone(), kind: error.kind(), message: error.to_string() }
    }
}

/// Progress notification emitted once per input row.
#[derive(Debug)]
pub enum RowEvent<'a> {
    Processed { index: usize, record: &'a MetricRecord },
    Skipped { index: usize, failure: &'a RowFailure },
}

/// Result of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Records of every processed row, in input order.
    pub report: Report,
    /// Rows left out of the report, in input order.
    pub failures: Vec<RowFailure>,
}

/// Scores articles against a fixed set of lexicons.
pub struct Analyzer {
    config: AnalyzerConfig,
    lexicons: LexiconStore,
}

impl Analyzer {
    /// Creates an Analyzer with default settings.
    pub fn new(lexicons: LexiconStore) -> Self {
        Self::with_config(lexicons, AnalyzerConfig::default())
    }

    /// Creates an Analyzer with a custom configuration.
    pub fn with_config(lexicons: LexiconStore, config: AnalyzerConfig) -> Self {
        Self { config, lexicons }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn lexicons(&self) -> &LexiconStore {
        &self.lexicons
    }

    /// The normalizer configured for this analyzer.
    pub fn normalizer(&self) -> Normalizer<'_> {
        Normalizer::new(self.lexicons.stopwords(), self.config.stopword_mode, self.config.lemmatize)
    }

    /// The metrics engine bound to this analyzer's sentiment lexicons.
    pub fn engine(&self) -> MetricsEngine<'_> {
        MetricsEngine::from_store(&self.lexicons)
    }

    /// Normalizes `body` and computes its metric record.
    pub fn analyze_text(&self, body: &str, url_id: &str, url: &str) -> Result<MetricRecord> {
        let tokens = self.normalizer().normalize(body)?;
        Ok(self.engine().compute(&tokens, body, url_id, url))
    }

    /// Fetches, persists and scores a single row.
    ///
    /// Any failure along the way is returned; nothing partial is kept in
    /// the report.
    pub async fn process_row<S: ArticleSource>(&self, source: &S, row: &InputRow) -> Result<MetricRecord> {
        let article = source.fetch(&row.url).await?;

        if let Some(dir) = &self.config.text_dir {
            let path = write_text_artifact(dir, &row.url_id, &article)?;
            tracing::debug!(url_id = %row.url_id, path = %path.display(), "text artifact written");
        }

        self.analyze_text(&article.body, &row.url_id, &row.url)
    }

    /// Processes every row in order, one at a time.
    pub async fn run<S: ArticleSource>(&self, source: &S, rows: &[InputRow]) -> BatchOutcome {
        self.run_with_progress(source, rows, |_| {}).await
    }

    /// Processes every row in order, reporting each outcome to `progress`.
    ///
    /// A failing row is logged and skipped; it never stops the batch.
    pub async fn run_with_progress<S, F>(&self, source: &S, rows: &[InputRow], mut progress: F) -> BatchOutcome
    where
        S: ArticleSource,
        F: FnMut(RowEvent<'_>),
    {
        let mut outcome = BatchOutcome::default();

        for (index, row) in rows.iter().enumerate() {
            match self.process_row(source, row).await {
                Ok(record) => {
                    tracing::info!(
                        url_id = %row.url_id,
                        words = record.word_count,
                        polarity = record.polarity_score,
                        fog = record.fog_index,
                        "processed"
                    );
                    progress(RowEvent::Processed { index, record: &record });
                    outcome.report.push(record);
                }
                Err(error) => {
                    let failure = RowFailure::new(row, &error);
                    tracing::warn!(
                        url_id = %row.url_id,
                        url = %row.url,
                        kind = %failure.kind,
                        error = %error,
                        "failed to process URL"
                    );
                    progress(RowEvent::Skipped { index, failure: &failure });
                    outcome.failures.push(failure);
                }
            }
        }

        outcome
    }
}
