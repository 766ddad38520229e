//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = Self::generate_template()?;

        match &self.output {
            Some(path) => {
                fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                eprintln!("Configuration written to {}", path.display());
                eprintln!("Use it with: langutils string -c {} TEXT", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }

    /// Default configuration rendered as TOML
    fn generate_template() -> Result<String> {
        // Unset keys are not serialized, so list them commented out
        let body = CliConfig::default().to_toml()?.replacen(
            "[escape]\n",
            "[escape]\n# Setting a marker enables escape-aware counting\n# marker = \"YUM\"\n# terminator = \"N\"\n",
            1,
        );
        Ok(format!(
            "# langutils configuration\n# Command-line flags override these values.\n\n{body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_template() {
        let template = GenerateConfigArgs::generate_template().unwrap();
        assert!(template.starts_with("# langutils configuration"));
        assert!(template.contains("[classification]"));
        assert!(template.contains("encoding = \"UTF8_BINARY\""));
        assert!(template.contains("[output]"));
        assert!(template.contains("[escape]\n# Setting a marker"));
        assert!(template.contains("# marker = \"YUM\"\n"));
        assert!(template.contains("# terminator = \"N\"\n"));
    }

    #[test]
    fn test_template_loads_back() {
        let template = GenerateConfigArgs::generate_template().unwrap();
        assert_eq!(CliConfig::from_toml(&template).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_execute_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("langutils.toml");

        let args = GenerateConfigArgs {
            output: Some(output_path.clone()),
        };
        assert!(args.execute().is_ok());

        let config = CliConfig::load(&output_path).unwrap();
        assert_eq!(config.classification.language, "ENGLISH");
    }
}
