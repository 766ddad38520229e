//! Plain text output formatter

use super::{Entry, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - a header line per input, then one field per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

fn count(value: Option<usize>) -> String {
    value.map_or_else(|| "-".to_string(), |n| n.to_string())
}

/// Field names and rendered values, in display order
fn fields(entry: &Entry) -> Vec<(&'static str, String)> {
    match entry {
        Entry::Char(report) => vec![
            ("encoding", report.encoding.clone()),
            ("language", report.language.clone()),
            (
                "code_point",
                report
                    .code_point
                    .map_or_else(|| "-".to_string(), |cp| format!("U+{cp:04X}")),
            ),
            ("position", report.position.to_string()),
            ("byte_width", report.byte_width.to_string()),
            ("valid", report.valid.to_string()),
            ("hex_number", report.hex_number.to_string()),
            ("natural_number", report.natural_number.to_string()),
            ("in_alphabet", report.in_alphabet.to_string()),
            ("romance_letter", report.romance_letter.to_string()),
            ("upper_case", report.upper_case.to_string()),
            ("lower_case", report.lower_case.to_string()),
            ("punctuation_mark", report.punctuation_mark.to_string()),
        ],
        Entry::String(report) => {
            let mut fields = vec![
                ("encoding", report.encoding.clone()),
                ("language", report.language.clone()),
                ("byte_length", report.byte_length.to_string()),
                ("length", count(report.length)),
                ("visible_length", count(report.visible_length)),
            ];
            if report.escaped_length.is_some() {
                fields.push(("escaped_length", count(report.escaped_length)));
            }
            fields.extend([
                ("valid", report.valid.to_string()),
                ("hex_number", report.hex_number.to_string()),
                (
                    "natural_number",
                    format!("{} (min {})", report.natural_number, report.min_length),
                ),
                ("in_alphabet", report.in_alphabet.to_string()),
                ("romance_alphabet", report.romance_alphabet.to_string()),
                ("upper_case", report.upper_case.to_string()),
                ("lower_case", report.lower_case.to_string()),
                ("punctuation_marks", report.punctuation_marks.to_string()),
            ]);
            fields
        }
        Entry::Length(_) => Vec::new(),
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_entry(&mut self, source: &str, entry: &Entry) -> Result<()> {
        // Counts fit on one line
        if let Entry::Length(report) = entry {
            writeln!(self.writer, "{source}: {}", report.length)?;
            return Ok(());
        }

        writeln!(self.writer, "{source}")?;
        for (name, value) in fields(entry) {
            writeln!(self.writer, "  {name}: {value}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
