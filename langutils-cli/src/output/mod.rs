//! Output formatting module

use anyhow::{anyhow, Result};
use langutils_api::{CharReport, StringReport};
use serde::Serialize;
use std::io;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result for one input
    fn format_entry(&mut self, source: &str, entry: &Entry) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON array of reports
    Json,
}

impl OutputFormat {
    /// Parse a format name from a configuration file
    pub fn from_name(name: &str) -> Result<Self> {
        <Self as clap::ValueEnum>::from_str(name, true)
            .map_err(|_| anyhow!("Unknown output format: {name}"))
    }

    /// Create the formatter for this format, writing to stdout
    pub fn stdout_formatter(self, pretty_json: bool) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout(), pretty_json)),
        }
    }
}

/// Character count of one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthReport {
    /// Encoding name the bytes were read with
    pub encoding: String,
    /// How characters were counted
    pub mode: LengthMode,
    /// Number of input bytes
    pub byte_length: usize,
    /// Number of characters
    pub length: usize,
}

/// Counting rule used for a [`LengthReport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    /// Every decoded character
    Plain,
    /// Combining marks skipped
    Visible,
    /// Escaped runs folded into one character
    Escaped,
}

/// Result for one input
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// Report of the `char` command
    Char(CharReport),
    /// Report of the `string` command
    String(StringReport),
    /// Report of the `length` command
    Length(LengthReport),
}
