//! High-level configuration API

use crate::error::{ApiError, Result};
use langutils_core::{Encoding, EscapeEncoding, EscapeSpec, Language};

/// Defaults applied by the handles when a call leaves an argument out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    encoding: Encoding,
    language: Language,
    min_length: usize,
    escape: Option<EscapeSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: Encoding::Utf8Binary,
            language: Language::English,
            min_length: 1,
            escape: None,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configuration for single-byte Western European text
    pub fn latin1(language: Language) -> Self {
        Self {
            encoding: Encoding::Iso8859_1,
            language,
            ..Self::default()
        }
    }

    /// Encoding used when a call passes `None`
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Language used when a call passes `None`
    pub fn language(&self) -> Language {
        self.language
    }

    /// Minimum digit count reported by string reports
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Escape convention used by string reports, if any
    pub fn escape(&self) -> Option<&EscapeSpec> {
        self.escape.as_ref()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
    escape_marker: Option<Vec<u8>>,
    escape_encoding: EscapeEncoding,
    terminator: Option<Vec<u8>>,
}

impl ConfigBuilder {
    /// Set the default encoding by name or numeric code
    pub fn encoding(mut self, name: &str) -> Result<Self> {
        self.config.encoding = crate::parse_encoding(name)?;
        Ok(self)
    }

    /// Set the default language by name, ISO code or numeric code
    pub fn language(mut self, name: &str) -> Result<Self> {
        self.config.language = crate::parse_language(name)?;
        Ok(self)
    }

    /// Set the default encoding
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    /// Set the default language
    pub fn with_language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    /// Set the minimum digit count for natural-number checks in reports
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.config.min_length = min_length;
        self
    }

    /// Enable escape-aware counting with this marker
    pub fn escape_marker(mut self, marker: impl Into<Vec<u8>>) -> Self {
        self.escape_marker = Some(marker.into());
        self
    }

    /// Set how escaped code points are written, by name or numeric code
    pub fn escape_encoding(mut self, name: &str) -> Result<Self> {
        self.escape_encoding = crate::parse_escape_encoding(name)?;
        Ok(self)
    }

    /// Set how escaped code points are written
    pub fn with_escape_encoding(mut self, encoding: EscapeEncoding) -> Self {
        self.escape_encoding = encoding;
        self
    }

    /// Set the optional terminator after an escaped code point
    pub fn terminator(mut self, terminator: impl Into<Vec<u8>>) -> Self {
        self.terminator = Some(terminator.into());
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> Result<Config> {
        // Validate escape settings
        match (self.escape_marker, self.terminator) {
            (Some(marker), _) if marker.is_empty() => {
                return Err(ApiError::Config(
                    "escape marker must not be empty".to_string(),
                ));
            }
            (Some(marker), terminator) => {
                let mut spec = EscapeSpec::new(marker, self.escape_encoding);
                if let Some(terminator) = terminator {
                    spec = spec.with_terminator(terminator);
                }
                self.config.escape = Some(spec);
            }
            (None, Some(_)) => {
                return Err(ApiError::Config(
                    "terminator requires an escape marker".to_string(),
                ));
            }
            (None, None) => {}
        }

        log::debug!(
            "configuration resolved: encoding={}, language={}, min_length={}",
            self.config.encoding,
            self.config.language,
            self.config.min_length
        );
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.encoding(), Encoding::Utf8Binary);
        assert_eq!(config.language(), Language::English);
        assert_eq!(config.min_length(), 1);
        assert!(config.escape().is_none());
    }

    #[test]
    fn test_builder_parses_names() {
        let config = Config::builder()
            .encoding("latin1")
            .unwrap()
            .language("fr")
            .unwrap()
            .min_length(3)
            .build()
            .unwrap();
        assert_eq!(config.encoding(), Encoding::Iso8859_1);
        assert_eq!(config.language(), Language::French);
        assert_eq!(config.min_length(), 3);
    }

    #[test]
    fn test_unknown_names() {
        assert!(matches!(
            Config::builder().encoding("ebcdic"),
            Err(ApiError::UnknownEncoding(name)) if name == "ebcdic"
        ));
        assert!(matches!(
            Config::builder().language("klingon"),
            Err(ApiError::UnknownLanguage(_))
        ));
        assert!(matches!(
            Config::builder().escape_encoding("octal"),
            Err(ApiError::UnknownEscapeEncoding(_))
        ));
    }

    #[test]
    fn test_escape_validation() {
        let config = Config::builder()
            .escape_marker("YUM")
            .terminator("N")
            .build()
            .unwrap();
        let spec = config.escape().unwrap();
        assert_eq!(spec.marker(), b"YUM");
        assert_eq!(spec.terminator(), Some(&b"N"[..]));

        assert!(matches!(
            Config::builder().terminator(";").build(),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            Config::builder().escape_marker("").build(),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn test_latin1_preset() {
        let config = Config::latin1(Language::Spanish);
        assert_eq!(config.encoding(), Encoding::Iso8859_1);
        assert_eq!(config.language(), Language::Spanish);
    }
}
