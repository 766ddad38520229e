//! Basic usage example for the classification handles

use langutils_api::{
    classify_string, CharUtils, Config, Encoding, EscapeEncoding, EscapeSpec, Language,
    StringUtils,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Convenience function with defaults (UTF-8, English)
    println!("=== Method 1: Convenience Function ===");
    let report = classify_string("Hello");
    println!("\"Hello\" matches: {}", report.matched_classes().join(", "));
    println!("length: {:?}\n", report.length);

    // Method 2: Explicit arguments override the handle defaults
    println!("=== Method 2: Per-call Arguments ===");
    let chars = CharUtils::new();
    for ch in ["ñ", "Ç", "¿", "7"] {
        for language in Language::ALL {
            println!(
                "  {ch} in {language}: letter/digit={} punctuation={}",
                chars.is_in_alphabet(ch, None, Some(language))?,
                chars.is_punctuation_mark_in_alphabet(ch, None, Some(language))?
            );
        }
    }

    // Method 3: Custom configuration for Latin-1 Spanish text
    println!("\n=== Method 3: Custom Configuration ===");
    let config = Config::builder()
        .encoding("ISO_8859_1")?
        .language("es")?
        .min_length(2)
        .build()?;
    let strings = StringUtils::with_config(config);
    // "año" in ISO-8859-1
    let word = [b'a', 0xf1, b'o'];
    println!(
        "Latin-1 \"año\": length={} spanish={} english={}",
        strings.length(word, None)?,
        strings.is_in_alphabet(word, None, None),
        strings.is_in_alphabet(word, None, Some(Language::English))
    );

    // Method 4: Escape-aware counting
    println!("\n=== Method 4: Escaped Length ===");
    let spec = EscapeSpec::new("\\u", EscapeEncoding::AsciiHex);
    let text = "ni\\u00f1o";
    println!(
        "{text}: raw={} escaped={}",
        strings.length(text, Some(Encoding::Ascii))?,
        strings.length_escaped(text, Some(Encoding::Ascii), &spec)?
    );

    Ok(())
}
