//! Language type: Flexible, validated language representation.
//!
//! This module provides the `Language` type used everywhere a language is
//! passed around. Instances are validated against the supported set, so a
//! `Language` in hand is always a language the site actually ships.

use anyhow::{bail, Result};

/// A supported site language.
///
/// All fields are static metadata; the set of languages is fixed for the
/// process lifetime and instances are immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "ja")
    code: &'static str,

    /// English name of the language (e.g., "English", "Japanese")
    name: &'static str,

    /// Display glyph shown in the language selector
    flag: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language {
        code: "en",
        name: "English",
        flag: "\u{1F1FA}\u{1F1F8}",
    };

    pub const JAPANESE: Language = Language {
        code: "ja",
        name: "Japanese",
        flag: "\u{1F1EF}\u{1F1F5}",
    };

    pub const CHINESE: Language = Language {
        code: "zh",
        name: "Chinese",
        flag: "\u{1F1E8}\u{1F1F3}",
    };

    pub const SPANISH: Language = Language {
        code: "es",
        name: "Spanish",
        flag: "\u{1F1EA}\u{1F1F8}",
    };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "ja")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code names a supported language
    /// * `Err` if the code is not supported
    pub fn from_code(code: &str) -> Result<Language> {
        match supported_languages().iter().find(|lang| lang.code == code) {
            Some(lang) => Ok(*lang),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the display glyph for the language selector.
    pub fn flag(&self) -> &'static str {
        self.flag
    }
}

/// The ordered set of languages the site ships.
///
/// Fixed for the process lifetime; the order is the order the language
/// selector presents them in. No duplicate codes.
pub(crate) fn supported_languages() -> &'static [Language] {
    const LANGUAGES: [Language; 4] = [
        Language::ENGLISH,
        Language::JAPANESE,
        Language::CHINESE,
        Language::SPANISH,
    ];
    &LANGUAGES
}
