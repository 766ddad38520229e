//! Alphabet tables: per-language letter, digit and punctuation membership
//!
//! Tables are built on first access and shared for the lifetime of the
//! process. Every predicate here works on an already decoded `char`; byte
//! validity is the encoding table's concern.

mod data;
mod table;

pub use table::CharTable;

use crate::language::Language;
use data::Extensions;
use std::sync::OnceLock;

/// Immutable repertoire of one language
#[derive(Debug, Clone)]
pub struct AlphabetEntry {
    lowercase: CharTable,
    uppercase: CharTable,
    punctuation: CharTable,
}

impl AlphabetEntry {
    fn build(extensions: &Extensions) -> Self {
        Self {
            lowercase: CharTable::new(('a'..='z').chain(extensions.lowercase.iter().copied())),
            uppercase: CharTable::new(('A'..='Z').chain(extensions.uppercase.iter().copied())),
            punctuation: CharTable::new(
                data::BASE_PUNCTUATION
                    .iter()
                    .chain(extensions.punctuation)
                    .copied(),
            ),
        }
    }

    /// Lowercase letter of this language
    #[inline]
    pub fn is_lower(&self, ch: char) -> bool {
        self.lowercase.contains(ch)
    }

    /// Uppercase letter of this language
    #[inline]
    pub fn is_upper(&self, ch: char) -> bool {
        self.uppercase.contains(ch)
    }

    /// Letter of either case
    #[inline]
    pub fn is_letter(&self, ch: char) -> bool {
        self.is_lower(ch) || self.is_upper(ch)
    }

    /// Punctuation mark of this language
    #[inline]
    pub fn is_punctuation(&self, ch: char) -> bool {
        self.punctuation.contains(ch)
    }

    /// Letter of either case or a decimal digit
    #[inline]
    pub fn is_in_alphabet(&self, ch: char) -> bool {
        self.is_letter(ch) || is_digit(ch)
    }
}

static ALPHABETS: OnceLock<[AlphabetEntry; 3]> = OnceLock::new();

/// Get the alphabet of a language
pub fn alphabet(language: Language) -> &'static AlphabetEntry {
    // Initialize all tables on first access
    let tables = ALPHABETS.get_or_init(|| {
        [
            AlphabetEntry::build(&data::ENGLISH),
            AlphabetEntry::build(&data::SPANISH),
            AlphabetEntry::build(&data::FRENCH),
        ]
    });
    &tables[language.code() as usize]
}

/// Decimal digit '0'-'9', identical in every language
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Hexadecimal digit '0'-'9', 'a'-'f', 'A'-'F'
#[inline]
pub fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

/// Lowercase letter of `language`
pub fn is_lower(ch: char, language: Language) -> bool {
    alphabet(language).is_lower(ch)
}

/// Uppercase letter of `language`
pub fn is_upper(ch: char, language: Language) -> bool {
    alphabet(language).is_upper(ch)
}

/// Letter of either case in `language`
pub fn is_letter(ch: char, language: Language) -> bool {
    alphabet(language).is_letter(ch)
}

/// Punctuation mark of `language`
pub fn is_punctuation(ch: char, language: Language) -> bool {
    alphabet(language).is_punctuation(ch)
}

/// Letter of `language` or a digit
pub fn is_in_alphabet(ch: char, language: Language) -> bool {
    alphabet(language).is_in_alphabet(ch)
}

/// Base Latin letter a-z or A-Z, regardless of language
#[inline]
pub fn is_in_romance_alphabet(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Combining diacritical mark that attaches to the preceding character
///
/// Covers the Combining Diacritical Marks blocks: base, extended,
/// for symbols, and half marks.
#[inline]
pub fn is_combining_mark(code_point: u32) -> bool {
    matches!(
        code_point,
        0x0300..=0x036f | 0x1ab0..=0x1aff | 0x20d0..=0x20ff | 0xfe20..=0xfe2f
    )
}
