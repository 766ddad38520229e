//! CLI command implementations

use crate::config::{CliConfig, EscapeConfig};
use crate::input::{collect_inputs, InputItem};
use crate::output::{Entry, OutputFormat};
use anyhow::Result;
use clap::{Args, Subcommand};
use langutils_api::{parse_encoding, ApiError, ConfigBuilder};
use std::path::PathBuf;

pub mod character;
pub mod generate_config;
pub mod length;
pub mod list;
pub mod string;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify a single character
    Char(character::CharArgs),

    /// Classify every character of a string
    String(string::StringArgs),

    /// Count the characters of a string
    Length(length::LengthArgs),

    /// List available encodings and languages with their codes
    List(list::ListArgs),

    /// Write a configuration file with every default spelled out
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Char(args) => args.execute(),
            Commands::String(args) => args.execute(),
            Commands::Length(args) => args.execute(),
            Commands::List(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Options shared by the classification commands
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Encoding of the input (UTF8_BINARY, ASCII, ISO_8859_1, or a numeric code)
    #[arg(short, long, value_name = "ENCODING")]
    pub encoding: Option<String>,

    /// Language whose alphabet to use (ENGLISH, SPANISH, FRENCH, an ISO code, or a numeric code)
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Read raw bytes from files instead of TEXT (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "LANGUTILS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Inputs and output settings once flags and the config file are merged
pub struct Session {
    /// Inputs to classify
    pub inputs: Vec<InputItem>,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let result = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
            // Fails only when a logger is already installed
            if let Err(err) = result {
                log::debug!("Keeping the existing logger: {err}");
            }
        }

        Ok(())
    }

    /// Merge flags over the configuration file and read the inputs
    ///
    /// Flags win over the file, which wins over built-in defaults. The
    /// returned builder holds the handle defaults so commands can add their
    /// own overrides before building.
    pub fn session(&self, text: Option<&str>) -> Result<(ConfigBuilder, Session)> {
        let file = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let encoding_name = self
            .encoding
            .as_deref()
            .unwrap_or(&file.classification.encoding);
        let language_name = self
            .language
            .as_deref()
            .unwrap_or(&file.classification.language);
        let encoding = parse_encoding(encoding_name)?;

        let mut builder = ConfigBuilder::default()
            .with_encoding(encoding)
            .language(language_name)?
            .min_length(file.classification.min_length);
        if let Some(marker) = &file.escape.marker {
            builder = builder
                .escape_marker(marker.as_bytes())
                .escape_encoding(&file.escape.encoding)?;
        } else if file.escape.encoding != EscapeConfig::default().encoding {
            log::warn!(
                "[escape].encoding = {:?} has no effect without [escape].marker",
                file.escape.encoding
            );
        }
        if let Some(terminator) = &file.escape.terminator {
            builder = builder.terminator(terminator.as_bytes());
        }

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&file.output.default_format)?,
        };

        log::info!("Reading input");
        let inputs = collect_inputs(text, &self.input, encoding)?;
        log::debug!("{} input(s), encoding {encoding}", inputs.len());

        Ok((
            builder,
            Session {
                inputs,
                format,
                pretty_json: file.output.pretty_json,
            },
        ))
    }
}

/// Wrap a classification error with the input it came from and, when known,
/// the byte offset it points at
pub(crate) fn located(err: ApiError, action: &str, source: &str) -> anyhow::Error {
    let context = match err.position() {
        Some(position) => format!("Cannot {action} {source} at byte {position}"),
        None => format!("Cannot {action} {source}"),
    };
    anyhow::Error::new(err).context(context)
}

impl Session {
    /// Write one entry per input and finish the output
    pub fn emit(
        &self,
        mut entry_for: impl FnMut(&InputItem) -> Result<Entry>,
    ) -> Result<()> {
        let mut formatter = self.format.stdout_formatter(self.pretty_json);
        for item in &self.inputs {
            let entry = entry_for(item)?;
            formatter.format_entry(&item.source, &entry)?;
        }
        formatter.finish()
    }
}
