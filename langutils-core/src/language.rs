//! Language identifiers selecting an alphabet

use crate::error::CoreError;
use core::fmt;
use core::str::FromStr;

/// Supported alphabets
///
/// The numeric values are persisted by consumers and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Language {
    /// English: base Latin letters only
    #[default]
    English = 0,
    /// Spanish: acute accents, diaeresis and tilde
    Spanish = 1,
    /// French: grave, acute, circumflex, diaeresis and cedilla
    French = 2,
}

impl Language {
    /// All languages in numeric order
    pub const ALL: [Language; 3] = [Language::English, Language::Spanish, Language::French];

    /// Stable numeric code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a language by its numeric code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Language::English),
            1 => Some(Language::Spanish),
            2 => Some(Language::French),
            _ => None,
        }
    }

    /// Canonical name, as exposed in the language map
    pub const fn name(self) -> &'static str {
        match self {
            Language::English => "ENGLISH",
            Language::Spanish => "SPANISH",
            Language::French => "FRENCH",
        }
    }

    /// ISO 639-1 code
    pub const fn iso_code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" | "eng" | "0" => Ok(Language::English),
            "spanish" | "es" | "spa" | "1" => Ok(Language::Spanish),
            "french" | "fr" | "fra" | "2" => Ok(Language::French),
            _ => Err(CoreError::InvalidArgument {
                reason: "unknown language",
            }),
        }
    }
}

impl TryFrom<u8> for Language {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Language::from_code(code).ok_or(CoreError::InvalidArgument {
            reason: "unknown language code",
        })
    }
}
