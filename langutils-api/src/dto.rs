//! Data Transfer Objects for API

/// Every classification of a single character
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharReport {
    /// Encoding name the bytes were read with
    pub encoding: String,
    /// Language name the alphabet checks used
    pub language: String,
    /// Decoded code point, absent when the bytes do not decode
    pub code_point: Option<u32>,
    /// Byte offset of the character in the input
    pub position: usize,
    /// Number of bytes the character occupies
    pub byte_width: usize,
    /// Decodes to one character
    pub valid: bool,
    /// Hexadecimal digit
    pub hex_number: bool,
    /// Decimal digit
    pub natural_number: bool,
    /// Letter of the language or digit
    pub in_alphabet: bool,
    /// Base Latin letter
    pub romance_letter: bool,
    /// Uppercase letter of the language
    pub upper_case: bool,
    /// Lowercase letter of the language
    pub lower_case: bool,
    /// Punctuation mark of the language
    pub punctuation_mark: bool,
}

/// Every classification and count of a whole string
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringReport {
    /// Encoding name the bytes were read with
    pub encoding: String,
    /// Language name the alphabet checks used
    pub language: String,
    /// Number of input bytes
    pub byte_length: usize,
    /// Character count, absent when the bytes do not decode
    pub length: Option<usize>,
    /// Character count without combining marks
    pub visible_length: Option<usize>,
    /// Character count with escapes folded, when an escape convention is configured
    pub escaped_length: Option<usize>,
    /// Minimum digit count used for `natural_number`
    pub min_length: usize,
    /// Every character decodes
    pub valid: bool,
    /// Only hexadecimal digits
    pub hex_number: bool,
    /// Only decimal digits, at least `min_length` of them
    pub natural_number: bool,
    /// Only letters of the language
    pub in_alphabet: bool,
    /// Only base Latin letters
    pub romance_alphabet: bool,
    /// Only uppercase letters of the language
    pub upper_case: bool,
    /// Only lowercase letters of the language
    pub lower_case: bool,
    /// Only punctuation marks of the language
    pub punctuation_marks: bool,
}

impl CharReport {
    /// Names of the classes that hold, in report order
    pub fn matched_classes(&self) -> Vec<&'static str> {
        [
            ("valid", self.valid),
            ("hex_number", self.hex_number),
            ("natural_number", self.natural_number),
            ("in_alphabet", self.in_alphabet),
            ("romance_letter", self.romance_letter),
            ("upper_case", self.upper_case),
            ("lower_case", self.lower_case),
            ("punctuation_mark", self.punctuation_mark),
        ]
        .into_iter()
        .filter_map(|(name, holds)| holds.then_some(name))
        .collect()
    }
}

impl StringReport {
    /// Names of the classes that hold, in report order
    pub fn matched_classes(&self) -> Vec<&'static str> {
        [
            ("valid", self.valid),
            ("hex_number", self.hex_number),
            ("natural_number", self.natural_number),
            ("in_alphabet", self.in_alphabet),
            ("romance_alphabet", self.romance_alphabet),
            ("upper_case", self.upper_case),
            ("lower_case", self.lower_case),
            ("punctuation_marks", self.punctuation_marks),
        ]
        .into_iter()
        .filter_map(|(name, holds)| holds.then_some(name))
        .collect()
    }
}
