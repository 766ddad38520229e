//! Char command implementation

use super::{located, CommonArgs};
use crate::output::Entry;
use anyhow::Result;
use clap::Args;
use langutils_api::CharUtils;

/// Arguments for the char command
#[derive(Debug, Args)]
pub struct CharArgs {
    /// The character to classify
    #[arg(
        value_name = "CHAR",
        required_unless_present = "input",
        conflicts_with = "input"
    )]
    pub text: Option<String>,

    /// Classify the character starting at this byte offset of the input
    #[arg(long, value_name = "BYTE")]
    pub index: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CharArgs {
    /// Execute the char command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging()?;

        log::info!("Classifying characters");
        log::debug!("Arguments: {:?}", self);

        let (builder, session) = self.common.session(self.text.as_deref())?;
        let utils = CharUtils::with_config(builder.build()?);

        session.emit(|item| {
            let report = match self.index {
                Some(index) => utils.classify_at(&item.bytes, index, None, None),
                None => utils.classify(&item.bytes, None, None),
            }
            .map_err(|err| located(err, "classify", &item.source))?;
            Ok(Entry::Char(report))
        })
    }
}
