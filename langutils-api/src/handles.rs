//! Character and string classification handles
//!
//! Both handles resolve `None` arguments against their [`Config`], so the
//! same handle can be shared across threads and calls stay short.

use crate::config::Config;
use crate::dto::{CharReport, StringReport};
use crate::error::Result;
use crate::{language_encodings, string_encodings};
use langutils_core::encoding::DecodedChar;
use langutils_core::{char_class, string_class, CharClass, Encoding, EscapeSpec, Language};
use std::collections::BTreeMap;

/// Single-character classification
#[derive(Debug, Clone, Default)]
pub struct CharUtils {
    config: Config,
}

impl CharUtils {
    /// Create a handle with default configuration (UTF-8, English)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle with custom defaults
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encoding names mapped to their numeric codes
    pub fn string_encodings(&self) -> BTreeMap<&'static str, u8> {
        string_encodings()
    }

    /// Language names mapped to their numeric codes
    pub fn language_encodings(&self) -> BTreeMap<&'static str, u8> {
        language_encodings()
    }

    fn encoding(&self, encoding: Option<Encoding>) -> Encoding {
        encoding.unwrap_or(self.config.encoding())
    }

    fn language(&self, language: Option<Language>) -> Language {
        language.unwrap_or(self.config.language())
    }

    /// Decode once and check, logging input that does not decode
    fn check(&self, bytes: &[u8], encoding: Encoding, class: CharClass) -> Result<bool> {
        match char_class::decode_single(bytes, encoding)? {
            Some(ch) => Ok(class.matches(ch)),
            None => {
                log::trace!("{bytes:02x?} is not a valid {encoding} character");
                Ok(false)
            }
        }
    }

    /// Check whether a byte may appear in the encoding
    pub fn is_valid_byte(&self, byte: u8, encoding: Option<Encoding>) -> bool {
        self.encoding(encoding).is_valid_byte(byte)
    }

    /// Number of bytes of the character starting at `position`
    pub fn char_byte_length(
        &self,
        bytes: impl AsRef<[u8]>,
        position: usize,
        encoding: Option<Encoding>,
    ) -> Result<usize> {
        Ok(self
            .encoding(encoding)
            .char_byte_length(bytes.as_ref(), position)?)
    }

    /// Decode the character starting at `position`
    pub fn decode_char(
        &self,
        bytes: impl AsRef<[u8]>,
        position: usize,
        encoding: Option<Encoding>,
    ) -> Result<DecodedChar> {
        Ok(self.encoding(encoding).decode_char(bytes.as_ref(), position)?)
    }

    /// Bytes decode to exactly one character
    pub fn is_valid(&self, bytes: impl AsRef<[u8]>, encoding: Option<Encoding>) -> Result<bool> {
        self.check(bytes.as_ref(), self.encoding(encoding), CharClass::Valid)
    }

    /// Character is 0-9, a-f or A-F
    pub fn is_hex_number(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
    ) -> Result<bool> {
        self.check(bytes.as_ref(), self.encoding(encoding), CharClass::HexNumber)
    }

    /// Character is 0-9
    pub fn is_natural_number(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
    ) -> Result<bool> {
        self.check(
            bytes.as_ref(),
            self.encoding(encoding),
            CharClass::NaturalNumber,
        )
    }

    /// Character is a base Latin letter
    pub fn is_in_romance_alphabet(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
    ) -> Result<bool> {
        self.check(
            bytes.as_ref(),
            self.encoding(encoding),
            CharClass::RomanceLetter,
        )
    }

    /// Character is a letter of the language or a digit
    pub fn is_in_alphabet(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
        language: Option<Language>,
    ) -> Result<bool> {
        let class = CharClass::InAlphabet(self.language(language));
        self.check(bytes.as_ref(), self.encoding(encoding), class)
    }

    /// Character is an uppercase letter of the language
    pub fn is_upper_case_in_alphabet(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
        language: Option<Language>,
    ) -> Result<bool> {
        let class = CharClass::UpperCase(self.language(language));
        self.check(bytes.as_ref(), self.encoding(encoding), class)
    }

    /// Character is a lowercase letter of the language
    pub fn is_lower_case_in_alphabet(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
        language: Option<Language>,
    ) -> Result<bool> {
        let class = CharClass::LowerCase(self.language(language));
        self.check(bytes.as_ref(), self.encoding(encoding), class)
    }

    /// Character is a punctuation mark of the language
    pub fn is_punctuation_mark_in_alphabet(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
        language: Option<Language>,
    ) -> Result<bool> {
        let class = CharClass::PunctuationMark(self.language(language));
        self.check(bytes.as_ref(), self.encoding(encoding), class)
    }

    /// Run every classification on one character
    pub fn classify(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
        language: Option<Language>,
    ) -> Result<CharReport> {
        let bytes = bytes.as_ref();
        let encoding = self.encoding(encoding);

        let decoded = char_class::decode_single(bytes, encoding)?;
        if decoded.is_none() {
            log::debug!("{bytes:02x?} is not a valid {encoding} character");
        }
        Ok(self.report(decoded, 0, bytes.len(), encoding, self.language(language)))
    }

    /// Run every classification on the character at byte offset `position`
    ///
    /// A `position` inside a multi-byte character reports an invalid
    /// character; one past the end is an error.
    pub fn classify_at(
        &self,
        bytes: impl AsRef<[u8]>,
        position: usize,
        encoding: Option<Encoding>,
        language: Option<Language>,
    ) -> Result<CharReport> {
        let bytes = bytes.as_ref();
        let encoding = self.encoding(encoding);

        let decoded = char_class::decode_at(bytes, position, encoding)?;
        let width = match decoded {
            Some(decoded) => decoded.width,
            None => {
                log::debug!("no valid {encoding} character starts at byte {position}");
                1
            }
        };
        Ok(self.report(
            decoded.map(|decoded| decoded.ch),
            position,
            width,
            encoding,
            self.language(language),
        ))
    }

    fn report(
        &self,
        decoded: Option<char>,
        position: usize,
        byte_width: usize,
        encoding: Encoding,
        language: Language,
    ) -> CharReport {
        let holds = |class: CharClass| decoded.is_some_and(|ch| class.matches(ch));

        CharReport {
            encoding: encoding.name().to_string(),
            language: language.name().to_string(),
            code_point: decoded.map(u32::from),
            position,
            byte_width,
            valid: holds(CharClass::Valid),
            hex_number: holds(CharClass::HexNumber),
            natural_number: holds(CharClass::NaturalNumber),
            in_alphabet: holds(CharClass::InAlphabet(language)),
            romance_letter: holds(CharClass::RomanceLetter),
            upper_case: holds(CharClass::UpperCase(language)),
            lower_case: holds(CharClass::LowerCase(language)),
            punctuation_mark: holds(CharClass::PunctuationMark(language)),
        }
    }
}

/// Whole-string classification and counting
#[derive(Debug, Clone, Default)]
pub struct StringUtils {
    config: Config,
}

impl StringUtils {
    /// Create a handle with default configuration (UTF-8, English)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle with custom defaults
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encoding names mapped to their numeric codes
    pub fn string_encodings(&self) -> BTreeMap<&'static str, u8> {
        string_encodings()
    }

    /// Language names mapped to their numeric codes
    pub fn language_encodings(&self) -> BTreeMap<&'static str, u8> {
        language_encodings()
    }

    fn encoding(&self, encoding: Option<Encoding>) -> Encoding {
        encoding.unwrap_or(self.config.encoding())
    }

    fn language(&self, language: Option<Language>) -> Language {
        language.unwrap_or(self.config.language())
    }

    /// Number of characters
    pub fn length(&self, bytes: impl AsRef<[u8]>, encoding: Option<Encoding>) -> Result<usize> {
        Ok(string_class::length(bytes.as_ref(), self.encoding(encoding))?)
    }

    /// Number of characters, not counting combining marks
    pub fn visible_length(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
    ) -> Result<usize> {
        Ok(string_class::visible_length(
            bytes.as_ref(),
            self.encoding(encoding),
        )?)
    }

    /// Number of characters with each escaped run counted once
    pub fn length_escaped(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
        spec: &EscapeSpec,
    ) -> Result<usize> {
        Ok(langutils_core::length_escaped(
            bytes.as_ref(),
            self.encoding(encoding),
            spec,
        )?)
    }

    /// Only digits, and at least `min_length` of them
    ///
    /// `None` uses the configured minimum.
    pub fn is_natural_number(
        &self,
        bytes: impl AsRef<[u8]>,
        min_length: Option<usize>,
        encoding: Option<Encoding>,
    ) -> bool {
        let min_length = min_length.unwrap_or(self.config.min_length());
        string_class::is_natural_number(bytes.as_ref(), min_length, self.encoding(encoding))
    }

    /// Only 0-9, a-f and A-F
    pub fn is_hex_number(&self, bytes: impl AsRef<[u8]>, encoding: Option<Encoding>) -> bool {
        string_class::is_hex_number(bytes.as_ref(), self.encoding(encoding))
    }

    /// Every character decodes
    pub fn is_valid(&self, bytes: impl AsRef<[u8]>, encoding: Option<Encoding>) -> bool {
        string_class::is_valid(bytes.as_ref(), self.encoding(encoding))
    }

    /// Only base Latin letters
    pub fn is_in_romance_alphabet(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
    ) -> bool {
        string_class::is_in_romance_alphabet(bytes.as_ref(), self.encoding(encoding))
    }

    /// Only letters of the language
    pub fn is_in_alphabet(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
        language: Option<Language>,
    ) -> bool {
        string_class::is_in_alphabet(
            bytes.as_ref(),
            self.encoding(encoding),
            self.language(language),
        )
    }

    /// Only lowercase letters of the language
    pub fn is_lower_case_in_alphabet(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
        language: Option<Language>,
    ) -> bool {
        string_class::is_lower_case_in_alphabet(
            bytes.as_ref(),
            self.encoding(encoding),
            self.language(language),
        )
    }

    /// Only uppercase letters of the language
    pub fn is_upper_case_in_alphabet(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
        language: Option<Language>,
    ) -> bool {
        string_class::is_upper_case_in_alphabet(
            bytes.as_ref(),
            self.encoding(encoding),
            self.language(language),
        )
    }

    /// Only punctuation marks of the language
    pub fn is_punctuation_mark_in_alphabet(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
        language: Option<Language>,
    ) -> bool {
        string_class::is_punctuation_mark_in_alphabet(
            bytes.as_ref(),
            self.encoding(encoding),
            self.language(language),
        )
    }

    /// Run every classification and count on a string
    ///
    /// Counts that fail to decode are reported as absent rather than as an
    /// error.
    pub fn classify(
        &self,
        bytes: impl AsRef<[u8]>,
        encoding: Option<Encoding>,
        language: Option<Language>,
    ) -> StringReport {
        let bytes = bytes.as_ref();
        let encoding = self.encoding(encoding);
        let language = self.language(language);
        let min_length = self.config.min_length();

        let length = match string_class::length(bytes, encoding) {
            Ok(length) => Some(length),
            Err(err) => {
                log::debug!("input does not decode as {encoding}: {err}");
                None
            }
        };
        let escaped_length = self.config.escape().and_then(|spec| {
            langutils_core::length_escaped(bytes, encoding, spec)
                .inspect_err(|err| log::debug!("escaped length unavailable: {err}"))
                .ok()
        });
        let all = |class: CharClass| string_class::all_chars(bytes, encoding, class);

        StringReport {
            encoding: encoding.name().to_string(),
            language: language.name().to_string(),
            byte_length: bytes.len(),
            length,
            visible_length: string_class::visible_length(bytes, encoding).ok(),
            escaped_length,
            min_length,
            valid: length.is_some(),
            hex_number: all(CharClass::HexNumber),
            natural_number: string_class::is_natural_number(bytes, min_length, encoding),
            in_alphabet: all(CharClass::Letter(language)),
            romance_alphabet: all(CharClass::RomanceLetter),
            upper_case: all(CharClass::UpperCase(language)),
            lower_case: all(CharClass::LowerCase(language)),
            punctuation_marks: all(CharClass::PunctuationMark(language)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiError;

    #[test]
    fn test_none_resolves_to_config() {
        let utils = CharUtils::with_config(Config::latin1(Language::Spanish));
        // 0xf1 is ñ in ISO-8859-1
        assert!(utils.is_lower_case_in_alphabet([0xf1u8], None, None).unwrap());
        assert!(!utils
            .is_lower_case_in_alphabet([0xf1u8], None, Some(Language::English))
            .unwrap());
        assert!(!utils
            .is_lower_case_in_alphabet([0xf1u8], Some(Encoding::Ascii), None)
            .unwrap());
    }

    #[test]
    fn test_char_report() {
        let report = CharUtils::new().classify("F", None, None).unwrap();
        assert_eq!(report.encoding, "UTF8_BINARY");
        assert_eq!(report.language, "ENGLISH");
        assert_eq!(report.code_point, Some(0x46));
        assert_eq!(
            report.matched_classes(),
            vec!["valid", "hex_number", "in_alphabet", "romance_letter", "upper_case"]
        );
    }

    #[test]
    fn test_char_report_for_undecodable_byte() {
        let report = CharUtils::new()
            .classify([0xe9u8], Some(Encoding::Ascii), None)
            .unwrap();
        assert_eq!(report.code_point, None);
        assert!(report.matched_classes().is_empty());
    }

    #[test]
    fn test_char_report_inside_a_string() {
        let config = Config::builder()
            .with_language(Language::French)
            .build()
            .unwrap();
        let utils = CharUtils::with_config(config);
        // "Où?": 'ù' occupies bytes 1..3
        let report = utils.classify_at("Où?", 1, None, None).unwrap();
        assert_eq!(report.code_point, Some(0xf9));
        assert_eq!(report.position, 1);
        assert_eq!(report.byte_width, 2);
        assert!(report.lower_case);

        let report = utils.classify_at("Où?", 3, None, None).unwrap();
        assert!(report.punctuation_mark);

        // Continuation byte of 'ù'
        let report = utils.classify_at("Où?", 2, None, None).unwrap();
        assert_eq!(report.code_point, None);
        assert!(!report.valid);
    }

    #[test]
    fn test_char_report_past_the_end() {
        let err = CharUtils::new().classify_at("Où?", 4, None, None).unwrap_err();
        assert!(matches!(err, ApiError::OutOfBounds(4)));
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn test_string_report() {
        let report = StringUtils::new().classify("0123", None, None);
        assert_eq!(report.length, Some(4));
        assert!(report.natural_number);
        assert!(report.hex_number);
        assert!(!report.in_alphabet);
        assert_eq!(report.escaped_length, None);
    }

    #[test]
    fn test_string_report_with_escapes() {
        let config = Config::builder().escape_marker("YUM").build().unwrap();
        let report =
            StringUtils::with_config(config).classify("HealthyYUM2345N", Some(Encoding::Ascii), None);
        assert_eq!(report.length, Some(15));
        assert_eq!(report.escaped_length, Some(9));
    }

    #[test]
    fn test_min_length_default() {
        let config = Config::builder().min_length(3).build().unwrap();
        let utils = StringUtils::with_config(config);
        assert!(!utils.is_natural_number("12", None, None));
        assert!(utils.is_natural_number("12", Some(2), None));
        assert!(utils.is_natural_number("123", None, None));
    }
}
