//! JSON-lines export of extracted prospects.

use crate::error::CliError;
use crate::output::prospect_json;
use prospector_domain::{ProspectRecord, ProspectSink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one JSON object per record, one record per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl JsonLinesSink<BufWriter<File>> {
    /// Open a file for appending, creating it if needed.
    pub fn append_to(path: &Path) -> Result<Self, CliError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Total records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ProspectSink for JsonLinesSink<W> {
    type Error = CliError;

    fn accept(&mut self, records: &[ProspectRecord]) -> Result<usize, Self::Error> {
        for record in records {
            serde_json::to_writer(&mut self.writer, &prospect_json(record))?;
            self.writer.write_all(b"\n")?;
        }
        self.written += records.len();
        Ok(records.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospector_domain::{ExtraData, Provenance};
    use tempfile::tempdir;

    fn record(name: &str) -> ProspectRecord {
        ProspectRecord::new(name, ExtraData::new(Provenance::new("emphasis", 0)))
    }

    #[test]
    fn test_one_line_per_record() {
        let mut sink = JsonLinesSink::new(Vec::new());
        assert_eq!(sink.accept(&[record("Acme Corp"), record("Globex")]).unwrap(), 2);
        assert_eq!(sink.written(), 2);

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["company_name"], "Acme Corp");
    }

    #[test]
    fn test_appends_across_sinks() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prospects.jsonl");

        for name in ["Acme Corp", "Globex"] {
            let mut sink = JsonLinesSink::append_to(&path).unwrap();
            sink.accept(&[record(name)]).unwrap();
            sink.flush().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
