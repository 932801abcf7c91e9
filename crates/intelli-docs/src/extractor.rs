use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::model::DocRecord;

/// Field separator used in the intermediate file.
pub const DEFAULT_SEPARATOR: &str = "$SEPARATOR$";

/// Marker every documented line starts with: dash, space, backtick.
const BULLET: &str = "- `";

/// Counters describing one extraction pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractReport {
    /// Lines read from the raw documentation.
    pub lines_read: usize,
    /// Records written to the intermediate output.
    pub records_written: usize,
}

/// Pulls `` - `signature`comment `` bullets out of a raw documentation dump.
#[derive(Debug, Clone)]
pub struct DocExtractor {
    separator: String,
}

impl Default for DocExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl DocExtractor {
    /// Create a new extractor writing records with `separator`.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Extract a record from a single raw line.
    ///
    /// Returns `None` for lines that are not documentation bullets or that
    /// lack the backtick closing the signature.
    pub fn extract_line(&self, line: &str) -> Option<DocRecord> {
        let rest = line.trim().strip_prefix(BULLET)?;
        let (signature, comment) = rest.split_once('`')?;
        Some(DocRecord::new(signature, comment))
    }

    /// Extract all records from an in-memory document, preserving order.
    pub fn extract_records(&self, source: &str) -> Vec<DocRecord> {
        source
            .lines()
            .filter_map(|line| self.extract_line(line))
            .collect()
    }

    /// Stream records from `reader` into `writer`, one line per record.
    pub fn extract<R, W>(&self, reader: R, mut writer: W) -> io::Result<ExtractReport>
    where
        R: BufRead,
        W: Write,
    {
        let mut report = ExtractReport::default();
        for line in reader.lines() {
            let line = line?;
            report.lines_read += 1;
            let Some(record) = self.extract_line(&line) else {
                continue;
            };
            debug!(signature = %record.signature, "extracted");
            writeln!(writer, "{}", record.to_line(&self.separator))?;
            report.records_written += 1;
        }
        writer.flush()?;
        Ok(report)
    }
}
