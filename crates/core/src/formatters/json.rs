use std::io::Write;

use crate::Result;
use crate::metrics::MetricRecord;

/// Configuration for JSON report output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Write records as a JSON array to `writer`
pub fn write_json<W: Write>(mut writer: W, records: &[MetricRecord], config: &JsonConfig) -> Result<()> {
    if config.pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Convert records to a JSON array string
pub fn convert_to_json(records: &[MetricRecord], config: &JsonConfig) -> Result<String> {
    if config.pretty {
        Ok(serde_json::to_string_pretty(records)?)
    } else {
        Ok(serde_json::to_string(records)?)
    }
}
