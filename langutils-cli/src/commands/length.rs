//! Length command implementation

use super::{located, CommonArgs};
use crate::output::{Entry, LengthMode, LengthReport};
use anyhow::Result;
use clap::Args;
use langutils_api::StringUtils;

/// Arguments for the length command
#[derive(Debug, Args)]
pub struct LengthArgs {
    /// The text to count
    #[arg(
        value_name = "TEXT",
        required_unless_present = "input",
        conflicts_with = "input"
    )]
    pub text: Option<String>,

    /// Skip combining marks
    #[arg(long, conflicts_with = "escape_marker")]
    pub visible: bool,

    /// Count each MARKER-introduced escaped code point as one character
    #[arg(short = 'm', long, value_name = "MARKER")]
    pub escape_marker: Option<String>,

    /// How escaped code points are written (hex or decimal)
    #[arg(long, value_name = "ENCODING")]
    pub escape_encoding: Option<String>,

    /// Optional terminator after an escaped code point
    #[arg(short, long, value_name = "TERMINATOR")]
    pub terminator: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl LengthArgs {
    /// Execute the length command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging()?;

        log::info!("Counting characters");
        log::debug!("Arguments: {:?}", self);

        let (mut builder, session) = self.common.session(self.text.as_deref())?;
        if let Some(marker) = &self.escape_marker {
            builder = builder.escape_marker(marker.as_bytes());
        }
        if let Some(encoding) = &self.escape_encoding {
            builder = builder.escape_encoding(encoding)?;
        }
        if let Some(terminator) = &self.terminator {
            builder = builder.terminator(terminator.as_bytes());
        }
        let utils = StringUtils::with_config(builder.build()?);
        let config = utils.config();
        if self.escape_encoding.is_some() && config.escape().is_none() {
            log::warn!("--escape-encoding has no effect without an escape marker");
        }

        let mode = match (self.visible, config.escape()) {
            (true, _) => LengthMode::Visible,
            (false, Some(_)) => LengthMode::Escaped,
            (false, None) => LengthMode::Plain,
        };
        log::debug!("Counting mode: {mode:?}");

        session.emit(|item| {
            let length = match (mode, config.escape()) {
                (LengthMode::Escaped, Some(spec)) => {
                    utils.length_escaped(&item.bytes, None, spec)
                }
                (LengthMode::Visible, _) => utils.visible_length(&item.bytes, None),
                _ => utils.length(&item.bytes, None),
            }
            .map_err(|err| located(err, "count", &item.source))?;

            Ok(Entry::Length(LengthReport {
                encoding: config.encoding().name().to_string(),
                mode,
                byte_length: item.bytes.len(),
                length,
            }))
        })
    }
}
