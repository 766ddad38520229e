//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use crate::error::CliError;
use anyhow::Result;
use langutils_api::Encoding;

/// One piece of input and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputItem {
    /// The text argument itself, or the file path
    pub source: String,
    /// Bytes to classify
    pub bytes: Vec<u8>,
}

/// Gather inputs from a text argument or from file patterns
///
/// Files take their raw bytes. A text argument is re-encoded into `encoding`
/// where every character fits, so Latin-1 input can be typed directly.
pub fn collect_inputs(
    text: Option<&str>,
    patterns: &[String],
    encoding: Encoding,
) -> Result<Vec<InputItem>> {
    if !patterns.is_empty() {
        return resolve_patterns(patterns)?
            .into_iter()
            .map(|path| -> Result<InputItem> {
                Ok(InputItem {
                    source: path.display().to_string(),
                    bytes: FileReader::read_bytes(&path)?,
                })
            })
            .collect();
    }

    let text = text.ok_or(CliError::MissingInput)?;
    Ok(vec![InputItem {
        source: text.to_string(),
        bytes: encode_argument(text, encoding),
    }])
}

/// Encode a command-line argument for classification under `encoding`
pub fn encode_argument(text: &str, encoding: Encoding) -> Vec<u8> {
    if encoding == Encoding::Iso8859_1 {
        let latin1: Option<Vec<u8>> = text
            .chars()
            .map(|ch| u8::try_from(u32::from(ch)).ok())
            .collect();
        match latin1 {
            Some(bytes) => return bytes,
            None => log::debug!("{text:?} does not fit ISO-8859-1, using its UTF-8 bytes"),
        }
    }
    text.as_bytes().to_vec()
}
