//! Raw repertoire of each language
//!
//! Only the additions to the base Latin set are listed; the shared parts are
//! merged in when the tables are built.

/// Punctuation shared by all supported languages
pub(crate) const BASE_PUNCTUATION: &[char] = &[
    '!', '"', '\'', '(', ')', ',', '.', ':', ';', '?', '[', ']', '{', '}', '-',
];

/// Per-language additions to the base Latin letters and punctuation
pub(crate) struct Extensions {
    pub lowercase: &'static [char],
    pub uppercase: &'static [char],
    pub punctuation: &'static [char],
}

pub(crate) const ENGLISH: Extensions = Extensions {
    lowercase: &[],
    uppercase: &[],
    punctuation: &[],
};

pub(crate) const SPANISH: Extensions = Extensions {
    lowercase: &['á', 'é', 'í', 'ó', 'ú', 'ü', 'ñ'],
    uppercase: &['Á', 'É', 'Í', 'Ó', 'Ú', 'Ü', 'Ñ'],
    // guillemets, inverted exclamation and question marks
    punctuation: &['«', '»', '¡', '¿'],
};

pub(crate) const FRENCH: Extensions = Extensions {
    lowercase: &[
        'à', 'â', 'é', 'è', 'ê', 'ë', 'î', 'ï', 'ô', 'ù', 'û', 'ü', 'ÿ', 'ç',
    ],
    uppercase: &[
        'À', 'Â', 'É', 'È', 'Ê', 'Ë', 'Î', 'Ï', 'Ô', 'Ù', 'Û', 'Ü', 'Ç',
    ],
    punctuation: &['«', '»'],
};
