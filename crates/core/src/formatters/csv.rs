use std::io::Write;

use crate::Result;
use crate::metrics::{MetricRecord, REPORT_COLUMNS};

/// Configuration for CSV report output
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Field delimiter
    pub delimiter: u8,
    /// Write the column titles as the first row
    pub include_header: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self { delimiter: b',', include_header: true }
    }
}

/// Write records as CSV to `writer`, one row per record in order
///
/// The header row is written even when there are no records, so an empty
/// batch still yields a well-formed report.
pub fn write_csv<W: Write>(writer: W, records: &[MetricRecord], config: &CsvConfig) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .from_writer(writer);

    if config.include_header {
        csv_writer.write_record(REPORT_COLUMNS)?;
    }
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Convert records to a CSV string
pub fn convert_to_csv(records: &[MetricRecord], config: &CsvConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records, config)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> MetricRecord {
        MetricRecord {
            url_id: id.to_string(),
            url: format!("https://example.com/{id}"),
            positive_score: 2,
            negative_score: 1,
            polarity_score: 0.5,
            subjectivity_score: 0.25,
            avg_sentence_length: 6.0,
            percentage_complex_words: 50.0,
            fog_index: 22.4,
            complex_word_count: 6,
            word_count: 12,
            syllables_per_word: 2.0,
            personal_pronouns: 1,
            avg_word_length: 5.0,
        }
    }

    #[test]
    fn test_header_and_rows() {
        let output = convert_to_csv(&[record("1"), record("2")], &CsvConfig::default()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("URL_ID,URL,POSITIVE SCORE,NEGATIVE SCORE"));
        assert!(lines[0].ends_with("PERSONAL PRONOUNS,AVG WORD LENGTH"));
        assert_eq!(lines[1], "1,https://example.com/1,2,1,0.5,0.25,6.0,50.0,22.4,6.0,6,12,2.0,1,5.0");
        assert!(lines[2].starts_with("2,"));
    }

    #[test]
    fn test_empty_report_keeps_header() {
        let output = convert_to_csv(&[], &CsvConfig::default()).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("URL_ID,"));
    }

    #[test]
    fn test_without_header_and_custom_delimiter() {
        let config = CsvConfig { delimiter: b';', include_header: false };
        let output = convert_to_csv(&[record("9")], &config).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("9;https://example.com/9;2;1;"));
    }
}
