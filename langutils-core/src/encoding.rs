//! Encoding table: byte validity and character boundaries
//!
//! Every supported encoding maps a byte position to exactly one character.
//! ASCII and ISO-8859-1 are single-byte; UTF-8 declares the width of each
//! character in the high bits of its lead byte.

use crate::error::{CoreError, Result};
use core::fmt;
use core::iter::FusedIterator;
use core::str::FromStr;

/// Supported byte encodings
///
/// The numeric values are persisted by consumers and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Encoding {
    /// UTF-8, analyzed from the bit patterns of each byte
    #[default]
    Utf8Binary = 0,
    /// 7-bit ASCII
    Ascii = 1,
    /// ISO-8859-1 (Latin-1)
    Iso8859_1 = 2,
}

impl Encoding {
    /// All encodings in numeric order
    pub const ALL: [Encoding; 3] = [Encoding::Utf8Binary, Encoding::Ascii, Encoding::Iso8859_1];

    /// Stable numeric code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up an encoding by its numeric code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Encoding::Utf8Binary),
            1 => Some(Encoding::Ascii),
            2 => Some(Encoding::Iso8859_1),
            _ => None,
        }
    }

    /// Canonical name, as exposed in the encoding map
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Utf8Binary => "UTF8_BINARY",
            Encoding::Ascii => "ASCII",
            Encoding::Iso8859_1 => "ISO_8859_1",
        }
    }

    /// True if every character occupies exactly one byte
    pub const fn is_single_byte(self) -> bool {
        !matches!(self, Encoding::Utf8Binary)
    }

    /// Check whether a byte may appear in this encoding
    #[inline]
    pub fn is_valid_byte(self, byte: u8) -> bool {
        match self {
            Encoding::Ascii => byte <= 0x7f,
            Encoding::Iso8859_1 => true,
            Encoding::Utf8Binary => utf8_lead_width(byte).is_some() || is_utf8_continuation(byte),
        }
    }

    /// Number of bytes the character starting at `position` occupies
    ///
    /// Single-byte encodings always report 1. For UTF-8 the width comes from
    /// the lead byte, and the continuation bytes it announces must be present.
    pub fn char_byte_length(self, bytes: &[u8], position: usize) -> Result<usize> {
        let lead = *bytes.get(position).ok_or(CoreError::OutOfBounds { position })?;
        if self.is_single_byte() {
            return Ok(1);
        }

        let width = utf8_lead_width(lead).ok_or(CoreError::MalformedSequence { position })?;
        let end = (position + width).min(bytes.len());
        for (offset, &byte) in bytes[position + 1..end].iter().enumerate() {
            if !is_utf8_continuation(byte) {
                return Err(CoreError::MalformedSequence {
                    position: position + 1 + offset,
                });
            }
        }
        if position + width > bytes.len() {
            return Err(CoreError::TruncatedSequence { position });
        }
        Ok(width)
    }

    /// Decode the character starting at `position`
    pub fn decode_char(self, bytes: &[u8], position: usize) -> Result<DecodedChar> {
        let width = self.char_byte_length(bytes, position)?;
        let lead = bytes[position];

        let ch = match self {
            Encoding::Ascii if lead > 0x7f => {
                return Err(CoreError::InvalidByte {
                    position,
                    byte: lead,
                })
            }
            Encoding::Ascii | Encoding::Iso8859_1 => char::from(lead),
            Encoding::Utf8Binary => decode_utf8(&bytes[position..position + width], position)?,
        };

        Ok(DecodedChar {
            ch,
            position,
            width,
        })
    }

    /// Iterate over the characters of `bytes`
    pub fn decode(self, bytes: &[u8]) -> Decoder<'_> {
        Decoder {
            bytes,
            encoding: self,
            position: 0,
            failed: false,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "utf8_binary" | "utf8" | "utf-8" | "0" => Ok(Encoding::Utf8Binary),
            "ascii" | "us-ascii" | "1" => Ok(Encoding::Ascii),
            "iso_8859_1" | "iso-8859-1" | "latin1" | "latin-1" | "2" => Ok(Encoding::Iso8859_1),
            _ => Err(CoreError::InvalidArgument {
                reason: "unknown encoding",
            }),
        }
    }
}

impl TryFrom<u8> for Encoding {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Self> {
        Encoding::from_code(code).ok_or(CoreError::InvalidArgument {
            reason: "unknown encoding code",
        })
    }
}

/// Check whether a byte may appear in `encoding`
#[inline]
pub fn is_valid_byte(byte: u8, encoding: Encoding) -> bool {
    encoding.is_valid_byte(byte)
}

/// Number of bytes the character at `position` occupies in `encoding`
pub fn char_byte_length(bytes: &[u8], position: usize, encoding: Encoding) -> Result<usize> {
    encoding.char_byte_length(bytes, position)
}

/// Width announced by a UTF-8 lead byte, `None` for continuation or illegal bytes
#[inline]
pub const fn utf8_lead_width(byte: u8) -> Option<usize> {
    match byte {
        0x00..=0x7f => Some(1),
        0xc0..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf7 => Some(4),
        _ => None,
    }
}

/// True for bytes of the form `10xxxxxx`
#[inline]
pub const fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0xc0 == 0x80
}

// Payload mask of the lead byte and smallest legal value, indexed by width - 1
const LEAD_MASK: [u8; 4] = [0x7f, 0x1f, 0x0f, 0x07];
const MIN_VALUE: [u32; 4] = [0, 0x80, 0x800, 0x1_0000];

fn decode_utf8(seq: &[u8], position: usize) -> Result<char> {
    let width = seq.len();
    let value = seq[1..]
        .iter()
        .fold(u32::from(seq[0] & LEAD_MASK[width - 1]), |acc, &byte| {
            (acc << 6) | u32::from(byte & 0x3f)
        });

    if value < MIN_VALUE[width - 1] {
        return Err(CoreError::InvalidCodePoint { position, value });
    }
    char::from_u32(value).ok_or(CoreError::InvalidCodePoint { position, value })
}

/// One decoded character and where it sits in the source bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedChar {
    /// The character
    pub ch: char,
    /// Byte offset of the first byte
    pub position: usize,
    /// Number of bytes in the source encoding
    pub width: usize,
}

/// Iterator over the characters of a byte string
///
/// Yields at most one error, then stops.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    encoding: Encoding,
    position: usize,
    failed: bool,
}

impl Iterator for Decoder<'_> {
    type Item = Result<DecodedChar>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.bytes.len() {
            return None;
        }
        match self.encoding.decode_char(self.bytes, self.position) {
            Ok(decoded) => {
                self.position += decoded.width;
                Some(Ok(decoded))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Decoder<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_codes_are_stable() {
        assert_eq!(Encoding::Utf8Binary.code(), 0);
        assert_eq!(Encoding::Ascii.code(), 1);
        assert_eq!(Encoding::Iso8859_1.code(), 2);
        for encoding in Encoding::ALL {
            assert_eq!(Encoding::from_code(encoding.code()), Some(encoding));
        }
        assert_eq!(Encoding::from_code(3), None);
        assert_eq!(Encoding::default(), Encoding::Utf8Binary);
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("UTF8_BINARY".parse::<Encoding>(), Ok(Encoding::Utf8Binary));
        assert_eq!("utf-8".parse::<Encoding>(), Ok(Encoding::Utf8Binary));
        assert_eq!("ascii".parse::<Encoding>(), Ok(Encoding::Ascii));
        assert_eq!("latin1".parse::<Encoding>(), Ok(Encoding::Iso8859_1));
        assert!("ebcdic".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_utf8_lead_widths() {
        for byte in [0x7f, 0x1f, 0x0f] {
            assert_eq!(utf8_lead_width(byte), Some(1));
        }
        for byte in [0xc0, 0xcf, 0xdf] {
            assert_eq!(utf8_lead_width(byte), Some(2));
        }
        for byte in [0xe0, 0xe7, 0xef] {
            assert_eq!(utf8_lead_width(byte), Some(3));
        }
        for byte in [0xf0, 0xf3, 0xf7] {
            assert_eq!(utf8_lead_width(byte), Some(4));
        }
        for byte in [0xf8, 0xfc, 0xff, 0x80, 0xbf] {
            assert_eq!(utf8_lead_width(byte), None);
        }
    }

    #[test]
    fn test_valid_bytes_per_encoding() {
        assert!(is_valid_byte(0x7f, Encoding::Ascii));
        assert!(!is_valid_byte(0x80, Encoding::Ascii));
        assert!(is_valid_byte(0xff, Encoding::Iso8859_1));
        assert!(is_valid_byte(0x80, Encoding::Utf8Binary));
        assert!(is_valid_byte(0xf7, Encoding::Utf8Binary));
        assert!(!is_valid_byte(0xf8, Encoding::Utf8Binary));
    }

    #[test]
    fn test_char_byte_length_utf8() {
        let text = "añ€😀".as_bytes();
        assert_eq!(char_byte_length(text, 0, Encoding::Utf8Binary), Ok(1));
        assert_eq!(char_byte_length(text, 1, Encoding::Utf8Binary), Ok(2));
        assert_eq!(char_byte_length(text, 3, Encoding::Utf8Binary), Ok(3));
        assert_eq!(char_byte_length(text, 6, Encoding::Utf8Binary), Ok(4));
        assert_eq!(
            char_byte_length(text, 10, Encoding::Utf8Binary),
            Err(CoreError::OutOfBounds { position: 10 })
        );
    }

    #[test]
    fn test_char_byte_length_single_byte_encodings() {
        let text = [0xe9, 0x41];
        assert_eq!(char_byte_length(&text, 0, Encoding::Iso8859_1), Ok(1));
        assert_eq!(char_byte_length(&text, 0, Encoding::Ascii), Ok(1));
    }

    #[test]
    fn test_char_byte_length_errors() {
        // Continuation byte in lead position
        assert_eq!(
            char_byte_length(&[0x80], 0, Encoding::Utf8Binary),
            Err(CoreError::MalformedSequence { position: 0 })
        );
        // Missing continuation bytes
        assert_eq!(
            char_byte_length(&[0xe2, 0x82], 0, Encoding::Utf8Binary),
            Err(CoreError::TruncatedSequence { position: 0 })
        );
        // Continuation byte out of range
        assert_eq!(
            char_byte_length(&[0xc3, 0x41], 0, Encoding::Utf8Binary),
            Err(CoreError::MalformedSequence { position: 1 })
        );
    }

    #[test]
    fn test_decode_char() {
        let decoded = Encoding::Utf8Binary.decode_char("é".as_bytes(), 0).unwrap();
        assert_eq!(decoded.ch, 'é');
        assert_eq!(decoded.width, 2);

        let decoded = Encoding::Iso8859_1.decode_char(&[0xe9], 0).unwrap();
        assert_eq!(decoded.ch, 'é');
        assert_eq!(decoded.width, 1);

        assert_eq!(
            Encoding::Ascii.decode_char(&[0xe9], 0),
            Err(CoreError::InvalidByte {
                position: 0,
                byte: 0xe9
            })
        );
    }

    #[test]
    fn test_decode_rejects_overlong_and_surrogates() {
        // Overlong encoding of '/'
        assert_eq!(
            Encoding::Utf8Binary.decode_char(&[0xc0, 0xaf], 0),
            Err(CoreError::InvalidCodePoint {
                position: 0,
                value: 0x2f
            })
        );
        // U+D800
        assert_eq!(
            Encoding::Utf8Binary.decode_char(&[0xed, 0xa0, 0x80], 0),
            Err(CoreError::InvalidCodePoint {
                position: 0,
                value: 0xd800
            })
        );
        // Above U+10FFFF
        assert!(Encoding::Utf8Binary
            .decode_char(&[0xf7, 0xbf, 0xbf, 0xbf], 0)
            .is_err());
    }

    #[test]
    fn test_decoder_stops_after_error() {
        let bytes = [b'a', 0xff, b'b'];
        let items: Vec<_> = Encoding::Utf8Binary.decode(&bytes).collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
    }

    #[test]
    fn test_decoder_positions() {
        let chars: Vec<_> = Encoding::Utf8Binary
            .decode("hé!".as_bytes())
            .map(|c| c.unwrap())
            .collect();
        let positions: Vec<_> = chars.iter().map(|c| (c.ch, c.position)).collect();
        assert_eq!(positions, vec![('h', 0), ('é', 1), ('!', 3)]);
    }
}
