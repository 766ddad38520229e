//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader that keeps the raw bytes
///
/// Files are classified in whatever encoding the user selects, so no UTF-8
/// validation happens here.
pub struct FileReader;

impl FileReader {
    /// Read a file as raw bytes, minus one trailing line ending
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        let mut content =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        if content.ends_with(b"\n") {
            content.pop();
            if content.ends_with(b"\r") {
                content.pop();
            }
            log::debug!("Stripped trailing line ending from {}", path.display());
        }

        Ok(content)
    }
}
