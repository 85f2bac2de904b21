//! Error types for Lexiscore operations.
//!
//! This module defines the main error type [`LexiscoreError`] which represents
//! all possible errors that can occur while loading lexicons, fetching
//! articles, processing text, and reading or writing reports.
//!
//! Every variant belongs to one of three broad [`ErrorKind`]s. Batch callers
//! use the kind to report why a row was skipped.
//!
//! # Example
//!
//! ```rust
//! use lexiscore_core::{ErrorKind, LexiscoreError, Result};
//!
//! fn title_of(html: &str) -> Result<String> {
//!     if html.is_empty() {
//!         return Err(LexiscoreError::MissingTitle);
//!     }
//!     // ... extraction logic
//!     # Ok(String::new())
//! }
//!
//! let err = title_of("").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Fetch);
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for article scoring operations.
#[derive(Error, Debug)]
pub enum LexiscoreError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and non-success status codes.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// A local article page could not be read.
    #[error("Article page unavailable at {location}: {reason}")]
    PageUnavailable { location: String, reason: String },

    /// The page has no `<title>` element.
    #[error("Page has no title element")]
    MissingTitle,

    /// The page has no element matching the content selector.
    #[error("Page has no content container matching `{selector}`")]
    MissingContent { selector: String },

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Standard I/O errors for file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row identifier that cannot be used as a file name.
    #[error("Invalid URL_ID for a file name: {0:?}")]
    InvalidIdentifier(String),

    /// A lexicon file could not be interpreted.
    #[error("Invalid lexicon {path}: {reason}")]
    LexiconError { path: PathBuf, reason: String },

    /// Tabular input or output errors.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tokenizer or lemmatizer failure on malformed text.
    #[error("Text processing failed: {0}")]
    ProcessingError(String),
}

/// Coarse classification of a [`LexiscoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network or HTML-shape failure while retrieving an article.
    Fetch,
    /// Lexicon, input, output or artifact file access.
    Io,
    /// Failure while turning text into tokens or metrics.
    Processing,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Fetch => "fetch",
            ErrorKind::Io => "io",
            ErrorKind::Processing => "processing",
        };
        f.write_str(name)
    }
}

impl LexiscoreError {
    /// Returns the broad category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "fetch")]
            LexiscoreError::HttpError(_) => ErrorKind::Fetch,
            LexiscoreError::Timeout { .. }
            | LexiscoreError::InvalidUrl(_)
            | LexiscoreError::PageUnavailable { .. }
            | LexiscoreError::HtmlParseError(_)
            | LexiscoreError::MissingTitle
            | LexiscoreError::MissingContent { .. } => ErrorKind::Fetch,
            LexiscoreError::FileNotFound(_)
            | LexiscoreError::Io(_)
            | LexiscoreError::LexiconError { .. }
            | LexiscoreError::InvalidIdentifier(_)
            | LexiscoreError::Csv(_)
            | LexiscoreError::Json(_) => ErrorKind::Io,
            LexiscoreError::ProcessingError(_) => ErrorKind::Processing,
        }
    }
}

/// Result type alias for LexiscoreError.
pub type Result<T> = std::result::Result<T, LexiscoreError>;
