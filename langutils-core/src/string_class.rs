//! Whole-string classification and length counting
//!
//! Predicates decode the input with the given encoding and hold only when
//! every character matches; the first undecodable or non-matching character
//! ends the scan with `false`. Counting operations report decoding failures
//! as errors instead.

use crate::alphabet::is_combining_mark;
use crate::char_class::CharClass;
use crate::encoding::Encoding;
use crate::error::Result;
use crate::language::Language;

/// True if every character of `bytes` decodes and matches `class`
///
/// Holds vacuously for empty input.
pub fn all_chars(bytes: &[u8], encoding: Encoding, class: CharClass) -> bool {
    encoding
        .decode(bytes)
        .all(|decoded| decoded.is_ok_and(|decoded| class.matches(decoded.ch)))
}

/// Number of decoded characters
pub fn length(bytes: &[u8], encoding: Encoding) -> Result<usize> {
    if encoding == Encoding::Iso8859_1 {
        return Ok(bytes.len());
    }
    encoding.decode(bytes).try_fold(0, |count, decoded| {
        decoded?;
        Ok(count + 1)
    })
}

/// Number of decoded characters, not counting combining diacritical marks
pub fn visible_length(bytes: &[u8], encoding: Encoding) -> Result<usize> {
    encoding.decode(bytes).try_fold(0, |count, decoded| {
        let decoded = decoded?;
        Ok(if is_combining_mark(u32::from(decoded.ch)) {
            count
        } else {
            count + 1
        })
    })
}

/// Every character is a digit and there are at least `min_length` of them
///
/// An empty string is never a natural number, whatever `min_length` says.
pub fn is_natural_number(bytes: &[u8], min_length: usize, encoding: Encoding) -> bool {
    let mut count = 0;
    for decoded in encoding.decode(bytes) {
        match decoded {
            Ok(decoded) if CharClass::NaturalNumber.matches(decoded.ch) => count += 1,
            _ => return false,
        }
    }
    count >= min_length.max(1)
}

/// Every character is 0-9, a-f or A-F
pub fn is_hex_number(bytes: &[u8], encoding: Encoding) -> bool {
    all_chars(bytes, encoding, CharClass::HexNumber)
}

/// Every character decodes under `encoding`
pub fn is_valid(bytes: &[u8], encoding: Encoding) -> bool {
    all_chars(bytes, encoding, CharClass::Valid)
}

/// Every character is a base Latin letter
pub fn is_in_romance_alphabet(bytes: &[u8], encoding: Encoding) -> bool {
    all_chars(bytes, encoding, CharClass::RomanceLetter)
}

/// Every character is a letter of `language`
///
/// Unlike the single-character check, digits do not count here.
pub fn is_in_alphabet(bytes: &[u8], encoding: Encoding, language: Language) -> bool {
    all_chars(bytes, encoding, CharClass::Letter(language))
}

/// Every character is a lowercase letter of `language`
pub fn is_lower_case_in_alphabet(bytes: &[u8], encoding: Encoding, language: Language) -> bool {
    all_chars(bytes, encoding, CharClass::LowerCase(language))
}

/// Every character is an uppercase letter of `language`
pub fn is_upper_case_in_alphabet(bytes: &[u8], encoding: Encoding, language: Language) -> bool {
    all_chars(bytes, encoding, CharClass::UpperCase(language))
}

/// Every character is a punctuation mark of `language`
pub fn is_punctuation_mark_in_alphabet(
    bytes: &[u8],
    encoding: Encoding,
    language: Language,
) -> bool {
    all_chars(bytes, encoding, CharClass::PunctuationMark(language))
}
