//! Batch input rows, report files and per-article text artifacts.

use std::fs::{self, File};
use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::extract::ExtractedArticle;
use crate::formatters::{CsvConfig, JsonConfig, ReportFormat, write_csv, write_json};
use crate::metrics::MetricRecord;
use crate::{LexiscoreError, Result};

/// One row of the batch input: an identifier and the URL to score.
///
/// Identifiers are kept as text, so numeric and alphanumeric ids both work.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputRow {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Reads input rows from a CSV file with `URL_ID` and `URL` headers.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<Vec<InputRow>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LexiscoreError::FileNotFound(path.to_path_buf()));
    }
    read_input_from(File::open(path)?)
}

/// Reads input rows from any CSV source.
pub fn read_input_from<R: Read>(reader: R) -> Result<Vec<InputRow>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let rows = csv_reader.deserialize().collect::<std::result::Result<Vec<InputRow>, _>>()?;
    Ok(rows)
}

/// A finished report: one record per processed row, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    records: Vec<MetricRecord>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MetricRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the report to `path`, creating parent directories.
    pub fn write<P: AsRef<Path>>(&self, path: P, format: ReportFormat) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(File::create(path)?);
        match format {
            ReportFormat::Csv => write_csv(writer, &self.records, &CsvConfig::default())?,
            ReportFormat::Json => write_json(writer, &self.records, &JsonConfig { pretty: true })?,
        }

        tracing::info!(path = %path.display(), rows = self.records.len(), ?format, "report written");
        Ok(())
    }
}

/// Writes `<dir>/<url_id>.txt` holding the article title and body.
///
/// Identifiers that could name a file outside `dir` are rejected with
/// [`LexiscoreError::InvalidIdentifier`].
pub fn write_text_artifact(dir: &Path, url_id: &str, article: &ExtractedArticle) -> Result<PathBuf> {
    if !is_safe_file_stem(url_id) {
        return Err(LexiscoreError::InvalidIdentifier(url_id.to_string()));
    }
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{url_id}.txt"));
    fs::write(&path, article.to_text_artifact())?;
    Ok(path)
}

fn is_safe_file_stem(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\', '\0'])
}
