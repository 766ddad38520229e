//! List command implementation

use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Args, Subcommand};
use langutils_api::{language_encodings, string_encodings, EscapeEncoding, Language};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(subcommand)]
    pub subcommand: ListCommands,

    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// What to list
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// Supported encodings
    Encodings,
    /// Supported languages
    Languages,
    /// Ways an escaped code point can be written
    EscapeEncodings,
}

impl ListCommands {
    /// Names mapped to their numeric codes
    pub fn entries(self) -> BTreeMap<&'static str, u8> {
        match self {
            ListCommands::Encodings => string_encodings(),
            ListCommands::Languages => language_encodings(),
            ListCommands::EscapeEncodings => EscapeEncoding::ALL
                .into_iter()
                .map(|encoding| (encoding.name(), encoding.code()))
                .collect(),
        }
    }

    /// Extra column shown in text output
    fn detail(self, code: u8) -> Option<&'static str> {
        match self {
            ListCommands::Languages => Language::from_code(code).map(Language::iso_code),
            _ => None,
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(&mut stdout.lock())
    }

    fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        let entries = self.subcommand.entries();
        match self.format {
            OutputFormat::Text => {
                // Sorted by code, not by name
                let mut rows: Vec<_> = entries.into_iter().collect();
                rows.sort_by_key(|&(_, code)| code);
                for (name, code) in rows {
                    match self.subcommand.detail(code) {
                        Some(detail) => writeln!(writer, "{name}\t{code}\t{detail}")?,
                        None => writeln!(writer, "{name}\t{code}")?,
                    }
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, &entries)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(subcommand: ListCommands, format: OutputFormat) -> String {
        let args = ListArgs { subcommand, format };
        let mut output = Vec::new();
        args.write_to(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_encodings_text() {
        assert_eq!(
            render(ListCommands::Encodings, OutputFormat::Text),
            "UTF8_BINARY\t0\nASCII\t1\nISO_8859_1\t2\n"
        );
    }

    #[test]
    fn test_languages_text_has_iso_codes() {
        assert_eq!(
            render(ListCommands::Languages, OutputFormat::Text),
            "ENGLISH\t0\ten\nSPANISH\t1\tes\nFRENCH\t2\tfr\n"
        );
    }

    #[test]
    fn test_languages_json() {
        let output = render(ListCommands::Languages, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["ENGLISH"], 0);
        assert_eq!(value["SPANISH"], 1);
        assert_eq!(value["FRENCH"], 2);
    }

    #[test]
    fn test_escape_encodings() {
        let entries = ListCommands::EscapeEncodings.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries.values().any(|&code| code == 0));
        assert!(entries.values().any(|&code| code == 1));
    }
}
