//! Error handling for the CLI application

use std::fmt;

/// Failures of the CLI itself, as opposed to classification errors
#[derive(Debug)]
pub enum CliError {
    /// A path or pattern matched no regular file
    FileNotFound { pattern: String },
    /// A glob pattern that does not parse
    InvalidPattern { pattern: String, reason: String },
    /// A configuration file that does not parse
    InvalidConfig { path: Option<String>, reason: String },
    /// Neither a text argument nor `--input`
    MissingInput,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound { pattern } => write!(f, "File not found: {pattern}"),
            CliError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid file pattern {pattern:?}: {reason}")
            }
            CliError::InvalidConfig {
                path: Some(path),
                reason,
            } => write!(f, "Configuration error in {path}: {reason}"),
            CliError::InvalidConfig { path: None, reason } => {
                write!(f, "Configuration error: {reason}")
            }
            CliError::MissingInput => write!(f, "No input: pass TEXT or --input"),
        }
    }
}

impl std::error::Error for CliError {}
