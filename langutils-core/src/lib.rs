//! Encoding- and language-aware character classification
//!
//! This crate answers questions about raw text bytes: is this one character
//! a hex digit, is this whole string lowercase French, how many characters
//! does it hold once escape sequences are folded. Input is always a byte
//! slice paired with an [`Encoding`]; language-dependent questions also take
//! a [`Language`].
//!
//! # Architecture
//!
//! - **Tables**: [`encoding`] knows which bytes are valid and how to decode
//!   them, [`alphabet`] knows which decoded characters belong to a language
//! - **Classifiers**: [`char_class`] checks exactly one character,
//!   [`string_class`] checks every character of a string
//! - **Counting**: [`string_class::length`], [`string_class::visible_length`]
//!   and [`escape::length_escaped`]
//!
//! # Example
//!
//! ```rust
//! use langutils_core::{char_class, string_class, Encoding, Language};
//!
//! let ascii = Encoding::Ascii;
//! assert_eq!(char_class::is_hex_number(b"F", ascii), Ok(true));
//! assert!(string_class::is_lower_case_in_alphabet(b"abc", ascii, Language::English));
//!
//! // "niño" in UTF-8 is five bytes but four characters
//! let utf8 = Encoding::Utf8Binary;
//! assert_eq!(string_class::length("niño".as_bytes(), utf8), Ok(4));
//! assert!(string_class::is_in_alphabet("niño".as_bytes(), utf8, Language::Spanish));
//! ```

pub mod alphabet;
pub mod char_class;
pub mod encoding;
pub mod error;
pub mod escape;
pub mod language;
pub mod string_class;

pub use char_class::CharClass;
pub use encoding::{DecodedChar, Decoder, Encoding};
pub use error::{CoreError, Result};
pub use escape::{length_escaped, EscapeEncoding, EscapeSpec};
pub use language::Language;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports_cover_every_enum() {
        assert_eq!(Encoding::ALL.len(), 3);
        assert_eq!(Language::ALL.len(), 3);
        assert_eq!(EscapeEncoding::ALL.len(), 2);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Encoding::default(), Encoding::Utf8Binary);
        assert_eq!(Language::default(), Language::English);
        assert_eq!(EscapeEncoding::default(), EscapeEncoding::AsciiHex);
    }
}
