//! String command implementation

use super::CommonArgs;
use crate::output::Entry;
use anyhow::Result;
use clap::Args;
use langutils_api::StringUtils;

/// Arguments for the string command
#[derive(Debug, Args)]
pub struct StringArgs {
    /// The text to classify
    #[arg(
        value_name = "TEXT",
        required_unless_present = "input",
        conflicts_with = "input"
    )]
    pub text: Option<String>,

    /// Minimum digit count for the natural-number check
    #[arg(short, long, value_name = "N")]
    pub min_length: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl StringArgs {
    /// Execute the string command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging()?;

        log::info!("Classifying strings");
        log::debug!("Arguments: {:?}", self);

        let (mut builder, session) = self.common.session(self.text.as_deref())?;
        if let Some(min_length) = self.min_length {
            builder = builder.min_length(min_length);
        }
        let utils = StringUtils::with_config(builder.build()?);

        session.emit(|item| Ok(Entry::String(utils.classify(&item.bytes, None, None))))
    }
}
