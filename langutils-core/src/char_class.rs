//! Single-character classification
//!
//! Each operation takes the bytes of one character in a given encoding.
//! Bytes that do not decode classify as `false`; input that is empty or
//! spans more than one character is rejected with `InvalidArgument`.
//! [`decode_at`] instead picks one character out of a longer string by byte
//! offset.

use crate::alphabet::{self, alphabet};
use crate::encoding::{utf8_lead_width, DecodedChar, Encoding};
use crate::error::{CoreError, Result};
use crate::language::Language;

/// Classification predicate over a decoded character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Any character that decodes
    Valid,
    /// Hexadecimal digit
    HexNumber,
    /// Decimal digit
    NaturalNumber,
    /// Base Latin letter
    RomanceLetter,
    /// Letter or digit of the language
    InAlphabet(Language),
    /// Letter of the language, either case
    Letter(Language),
    /// Uppercase letter of the language
    UpperCase(Language),
    /// Lowercase letter of the language
    LowerCase(Language),
    /// Punctuation mark of the language
    PunctuationMark(Language),
}

impl CharClass {
    /// Check a decoded character against this class
    #[inline]
    pub fn matches(self, ch: char) -> bool {
        match self {
            CharClass::Valid => true,
            CharClass::HexNumber => alphabet::is_hex_digit(ch),
            CharClass::NaturalNumber => alphabet::is_digit(ch),
            CharClass::RomanceLetter => alphabet::is_in_romance_alphabet(ch),
            CharClass::InAlphabet(language) => alphabet(language).is_in_alphabet(ch),
            CharClass::Letter(language) => alphabet(language).is_letter(ch),
            CharClass::UpperCase(language) => alphabet(language).is_upper(ch),
            CharClass::LowerCase(language) => alphabet(language).is_lower(ch),
            CharClass::PunctuationMark(language) => alphabet(language).is_punctuation(ch),
        }
    }
}

/// Decode the single character held in `bytes`
///
/// `Ok(None)` means the bytes have the shape of one character but do not
/// decode under `encoding`.
pub fn decode_single(bytes: &[u8], encoding: Encoding) -> Result<Option<char>> {
    let Some(&lead) = bytes.first() else {
        return Err(CoreError::InvalidArgument {
            reason: "expected one character, got empty input",
        });
    };

    let extent = match encoding {
        Encoding::Utf8Binary => utf8_lead_width(lead).unwrap_or(1),
        Encoding::Ascii | Encoding::Iso8859_1 => 1,
    };
    if bytes.len() > extent {
        return Err(CoreError::InvalidArgument {
            reason: "expected one character, got several",
        });
    }

    Ok(encoding.decode_char(bytes, 0).ok().map(|decoded| decoded.ch))
}

/// Decode the character that starts at byte offset `position` of a longer string
///
/// `Ok(None)` means the bytes there do not decode, which includes a
/// `position` inside a multi-byte sequence. A `position` past the end is
/// `OutOfBounds`.
pub fn decode_at(
    bytes: &[u8],
    position: usize,
    encoding: Encoding,
) -> Result<Option<DecodedChar>> {
    if position >= bytes.len() {
        return Err(CoreError::OutOfBounds { position });
    }
    Ok(encoding.decode_char(bytes, position).ok())
}

/// Classify one character
pub fn classify(bytes: &[u8], encoding: Encoding, class: CharClass) -> Result<bool> {
    Ok(decode_single(bytes, encoding)?.is_some_and(|ch| class.matches(ch)))
}

/// Character decodes under `encoding`
pub fn is_valid(bytes: &[u8], encoding: Encoding) -> Result<bool> {
    classify(bytes, encoding, CharClass::Valid)
}

/// Character is 0-9, a-f or A-F
pub fn is_hex_number(bytes: &[u8], encoding: Encoding) -> Result<bool> {
    classify(bytes, encoding, CharClass::HexNumber)
}

/// Character is 0-9
pub fn is_natural_number(bytes: &[u8], encoding: Encoding) -> Result<bool> {
    classify(bytes, encoding, CharClass::NaturalNumber)
}

/// Character is a base Latin letter
pub fn is_in_romance_alphabet(bytes: &[u8], encoding: Encoding) -> Result<bool> {
    classify(bytes, encoding, CharClass::RomanceLetter)
}

/// Character is a letter of `language` or a digit
pub fn is_in_alphabet(bytes: &[u8], encoding: Encoding, language: Language) -> Result<bool> {
    classify(bytes, encoding, CharClass::InAlphabet(language))
}

/// Character is an uppercase letter of `language`
pub fn is_upper_case_in_alphabet(
    bytes: &[u8],
    encoding: Encoding,
    language: Language,
) -> Result<bool> {
    classify(bytes, encoding, CharClass::UpperCase(language))
}

/// Character is a lowercase letter of `language`
pub fn is_lower_case_in_alphabet(
    bytes: &[u8],
    encoding: Encoding,
    language: Language,
) -> Result<bool> {
    classify(bytes, encoding, CharClass::LowerCase(language))
}

/// Character is a punctuation mark of `language`
pub fn is_punctuation_mark_in_alphabet(
    bytes: &[u8],
    encoding: Encoding,
    language: Language,
) -> Result<bool> {
    classify(bytes, encoding, CharClass::PunctuationMark(language))
}
