//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Classification defaults
    #[serde(default)]
    pub classification: ClassificationConfig,

    /// Escape-aware counting
    #[serde(default)]
    pub escape: EscapeConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Classification-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ClassificationConfig {
    /// Default encoding name
    pub encoding: String,

    /// Default language name
    pub language: String,

    /// Minimum digit count for the natural-number check
    pub min_length: usize,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            encoding: "UTF8_BINARY".to_string(),
            language: "ENGLISH".to_string(),
            min_length: 1,
        }
    }
}

/// Escape convention used by `length` and string reports
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct EscapeConfig {
    /// Marker that starts an escaped code point; unset disables escapes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// How the code point is written
    pub encoding: String,

    /// Optional terminator after the code point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminator: Option<String>,
}

impl Default for EscapeConfig {
    fn default() -> Self {
        Self {
            marker: None,
            encoding: "hex".to_string(),
            terminator: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound {
                pattern: path.display().to_string(),
            }
            .into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content, Some(path))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Self::parse(content, None)
    }

    fn parse(content: &str, path: Option<&Path>) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            CliError::InvalidConfig {
                path: path.map(|p| p.display().to_string()),
                reason: e.message().to_string(),
            }
            .into()
        })
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.classification.encoding, "UTF8_BINARY");
        assert_eq!(config.classification.min_length, 1);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml(
            r#"
[classification]
language = "spanish"

[escape]
marker = "YUM"
terminator = "N"
"#,
        )
        .unwrap();
        assert_eq!(config.classification.language, "spanish");
        assert_eq!(config.classification.encoding, "UTF8_BINARY");
        assert_eq!(config.escape.marker.as_deref(), Some("YUM"));
        assert_eq!(config.escape.encoding, "hex");
        assert_eq!(config.escape.terminator.as_deref(), Some("N"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = CliConfig::from_toml("[output]\ncolour = true\n").unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = CliConfig::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("[classification]"));
        assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[classification]\nencoding = \"latin1\"").unwrap();
        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.classification.encoding, "latin1");
    }

    #[test]
    fn test_load_error_names_the_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[escape]\nmarker = 5").unwrap();
        let err = CliConfig::load(file.path()).unwrap_err();
        let expected = format!("Configuration error in {}", file.path().display());
        assert!(err.to_string().starts_with(&expected));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/langutils.toml")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
