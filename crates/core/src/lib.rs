pub mod analyzer;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod formatters;
pub mod lemmatize;
pub mod lexicon;
pub mod metrics;
pub mod normalize;
pub mod parse;
pub mod report;
pub mod source;
pub mod syllable;
pub mod tokenize;

pub use analyzer::{Analyzer, AnalyzerConfig, AnalyzerConfigBuilder, BatchOutcome, RowEvent, RowFailure};
pub use error::{ErrorKind, LexiscoreError, Result};
pub use extract::{DEFAULT_CONTENT_SELECTOR, ExtractedArticle, extract_article};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, HttpSource, fetch_file, fetch_url};
pub use formatters::{CsvConfig, JsonConfig, ReportFormat, convert_to_csv, convert_to_json};
pub use lemmatize::lemmatize;
pub use lexicon::{LexiconPaths, LexiconStore, StopwordCategory, WordSet};
pub use metrics::{MetricRecord, MetricsEngine, REPORT_COLUMNS, round_half_even};
pub use normalize::{Normalizer, StopwordMode, TokenSequence};
pub use parse::Document;
pub use report::{InputRow, Report, read_input, read_input_from, write_text_artifact};
pub use source::ArticleSource;
pub use syllable::count_syllables;
