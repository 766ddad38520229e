//! Public API for langutils character and string classification
//!
//! This crate wraps the classification engine in two handles,
//! [`CharUtils`] and [`StringUtils`], whose operations accept `None` for
//! encoding and language and fall back to the handle's [`Config`].
//!
//! # Example
//!
//! ```rust
//! use langutils_api::{Config, Encoding, Language, StringUtils};
//!
//! let utils = StringUtils::new();
//! assert!(utils.is_in_alphabet("Hola", None, None));
//! assert!(!utils.is_in_alphabet("niño", None, None));
//! assert!(utils.is_in_alphabet("niño", None, Some(Language::Spanish)));
//!
//! let latin1 = StringUtils::with_config(Config::latin1(Language::French));
//! assert_eq!(latin1.length([0xe9u8, b't', 0xe9], None).unwrap(), 3);
//! assert_eq!(latin1.config().encoding(), Encoding::Iso8859_1);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod handles;

use std::collections::BTreeMap;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{CharReport, StringReport};
pub use error::{ApiError, Result};
pub use handles::{CharUtils, StringUtils};
pub use langutils_core::{DecodedChar, Encoding, EscapeEncoding, EscapeSpec, Language};

/// Encoding names mapped to their numeric codes
pub fn string_encodings() -> BTreeMap<&'static str, u8> {
    Encoding::ALL
        .into_iter()
        .map(|encoding| (encoding.name(), encoding.code()))
        .collect()
}

/// Language names mapped to their numeric codes
pub fn language_encodings() -> BTreeMap<&'static str, u8> {
    Language::ALL
        .into_iter()
        .map(|language| (language.name(), language.code()))
        .collect()
}

// Convenience functions

/// Classify one character with default configuration
pub fn classify_char(bytes: impl AsRef<[u8]>) -> Result<CharReport> {
    CharUtils::new().classify(bytes, None, None)
}

/// Classify a whole string with default configuration
pub fn classify_string(bytes: impl AsRef<[u8]>) -> StringReport {
    StringUtils::new().classify(bytes, None, None)
}

/// Parse an encoding from its name or numeric code
pub fn parse_encoding(name: &str) -> Result<Encoding> {
    name.parse()
        .map_err(|_| ApiError::UnknownEncoding(name.to_string()))
}

/// Parse a language from its name, ISO code or numeric code
pub fn parse_language(name: &str) -> Result<Language> {
    name.parse()
        .map_err(|_| ApiError::UnknownLanguage(name.to_string()))
}

/// Parse an escape encoding from its name or numeric code
pub fn parse_escape_encoding(name: &str) -> Result<EscapeEncoding> {
    name.parse()
        .map_err(|_| ApiError::UnknownEscapeEncoding(name.to_string()))
}
