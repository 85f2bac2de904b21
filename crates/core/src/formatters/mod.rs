//! Report formatters.
//!
//! A report is written either as CSV with the column titles of
//! [`REPORT_COLUMNS`](crate::metrics::REPORT_COLUMNS) or as a JSON array of
//! objects keyed by the same titles.

pub mod csv;
pub mod json;

use std::path::Path;
use std::str::FromStr;

pub use self::csv::{CsvConfig, convert_to_csv, write_csv};
pub use self::json::{JsonConfig, convert_to_json, write_json};

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    /// Infers the format from a file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: csv, json", s)),
        }
    }
}
