//! JSON output formatter

use super::{Entry, OutputFormatter};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs reports as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<EntryData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct EntryData {
    /// The text argument or file path
    pub source: String,
    /// The report
    #[serde(flatten)]
    pub entry: Entry,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, source: &str, entry: &Entry) -> Result<()> {
        self.entries.push(EntryData {
            source: source.to_string(),
            entry: entry.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
