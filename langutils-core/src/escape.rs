//! Escape-aware length counting
//!
//! An escaped run has the shape
//! `{marker}{code point in the escape encoding}[terminator]`, e.g.
//! `\u0069` with marker `\u` and four hex digits. The whole run counts as one
//! character, or as nothing when the escaped code point is a combining mark.

use crate::alphabet::is_combining_mark;
use crate::encoding::Encoding;
use crate::error::{CoreError, Result};
use core::fmt;
use core::str::FromStr;

/// How the code point after an escape marker is written
///
/// The numeric values are persisted by consumers and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum EscapeEncoding {
    /// Exactly four ASCII hex digits
    #[default]
    AsciiHex = 0,
    /// One or more ASCII decimal digits
    AsciiDecimal = 1,
}

/// Number of digits in a hex escape
const HEX_ESCAPE_DIGITS: usize = 4;

impl EscapeEncoding {
    /// All escape encodings in numeric order
    pub const ALL: [EscapeEncoding; 2] = [EscapeEncoding::AsciiHex, EscapeEncoding::AsciiDecimal];

    /// Stable numeric code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up an escape encoding by its numeric code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(EscapeEncoding::AsciiHex),
            1 => Some(EscapeEncoding::AsciiDecimal),
            _ => None,
        }
    }

    /// Canonical name
    pub const fn name(self) -> &'static str {
        match self {
            EscapeEncoding::AsciiHex => "ASCII_HEX_UTF_ESCAPE",
            EscapeEncoding::AsciiDecimal => "ASCII_DECIMAL_UTF_ESCAPE",
        }
    }

    /// Parse the escaped code point at the start of `bytes`
    ///
    /// Returns the code point and the number of bytes consumed. `position` is
    /// only used for error reporting.
    fn parse(self, bytes: &[u8], position: usize) -> Result<(u32, usize)> {
        let malformed = CoreError::MalformedEscape { position };
        match self {
            EscapeEncoding::AsciiHex => {
                let digits = bytes.get(..HEX_ESCAPE_DIGITS).ok_or(malformed.clone())?;
                let value = digits.iter().try_fold(0u32, |acc, &byte| {
                    char::from(byte).to_digit(16).map(|digit| (acc << 4) | digit)
                });
                value
                    .map(|value| (value, HEX_ESCAPE_DIGITS))
                    .ok_or(malformed)
            }
            EscapeEncoding::AsciiDecimal => {
                let count = bytes.iter().take_while(|byte| byte.is_ascii_digit()).count();
                if count == 0 {
                    return Err(malformed);
                }
                let value = bytes[..count].iter().try_fold(0u32, |acc, &byte| {
                    acc.checked_mul(10)?.checked_add(u32::from(byte - b'0'))
                });
                value.map(|value| (value, count)).ok_or(malformed)
            }
        }
    }
}

impl fmt::Display for EscapeEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EscapeEncoding {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ascii_hex_utf_escape" | "hex" | "0" => Ok(EscapeEncoding::AsciiHex),
            "ascii_decimal_utf_escape" | "decimal" | "dec" | "1" => {
                Ok(EscapeEncoding::AsciiDecimal)
            }
            _ => Err(CoreError::InvalidArgument {
                reason: "unknown escape encoding",
            }),
        }
    }
}

impl TryFrom<u8> for EscapeEncoding {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Self> {
        EscapeEncoding::from_code(code).ok_or(CoreError::InvalidArgument {
            reason: "unknown escape encoding code",
        })
    }
}

/// Where escaped runs start, how they are written, and how they end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeSpec {
    marker: Vec<u8>,
    encoding: EscapeEncoding,
    terminator: Option<Vec<u8>>,
}

impl EscapeSpec {
    /// Create an escape convention with no terminator
    pub fn new(marker: impl Into<Vec<u8>>, encoding: EscapeEncoding) -> Self {
        Self {
            marker: marker.into(),
            encoding,
            terminator: None,
        }
    }

    /// Consume `terminator` after each escaped code point when present
    pub fn with_terminator(mut self, terminator: impl Into<Vec<u8>>) -> Self {
        let terminator = terminator.into();
        self.terminator = (!terminator.is_empty()).then_some(terminator);
        self
    }

    /// Escape marker bytes
    pub fn marker(&self) -> &[u8] {
        &self.marker
    }

    /// Escape encoding of the code point
    pub fn encoding(&self) -> EscapeEncoding {
        self.encoding
    }

    /// Terminator bytes, if any
    pub fn terminator(&self) -> Option<&[u8]> {
        self.terminator.as_deref()
    }
}

/// Count characters, folding each escaped run into one
///
/// Characters outside escaped runs are decoded with `encoding`. An empty
/// marker disables escaping.
pub fn length_escaped(bytes: &[u8], encoding: Encoding, spec: &EscapeSpec) -> Result<usize> {
    let mut position = 0;
    let mut count = 0;

    while position < bytes.len() {
        let rest = &bytes[position..];

        if !spec.marker.is_empty() && rest.starts_with(&spec.marker) {
            position += spec.marker.len();
            let (value, consumed) = spec.encoding.parse(&bytes[position..], position)?;
            if char::from_u32(value).is_none() {
                return Err(CoreError::InvalidCodePoint { position, value });
            }
            position += consumed;
            if !is_combining_mark(value) {
                count += 1;
            }

            if let Some(terminator) = spec.terminator() {
                if bytes[position..].starts_with(terminator) {
                    position += terminator.len();
                }
            }
            continue;
        }

        position += encoding.decode_char(bytes, position)?.width;
        count += 1;
    }

    Ok(count)
}
