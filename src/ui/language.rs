//! Language definitions for the localized guide pages

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported languages of the guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Uk,
    Fa,
}

/// Language used when nothing in the browser preferences matches
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::En;

impl LanguageCode {
    /// Get all supported languages, in display order
    pub fn all() -> &'static [LanguageCode] {
        &[LanguageCode::En, LanguageCode::Uk, LanguageCode::Fa]
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Uk => "uk",
            LanguageCode::Fa => "fa",
        }
    }

    /// Parse a lowercase ISO 639-1 code. Returns `None` for anything unsupported.
    pub fn from_code(code: &str) -> Option<LanguageCode> {
        match code {
            "en" => Some(LanguageCode::En),
            "uk" => Some(LanguageCode::Uk),
            "fa" => Some(LanguageCode::Fa),
            _ => None,
        }
    }

    /// Lookup-table entry for this language
    pub fn entry(&self) -> &'static LanguageEntry {
        &LANGUAGE_TABLE[self]
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language code '{0}'")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for LanguageCode {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::from_code(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

/// One localized variant of the guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: LanguageCode,
    /// Relative path of the localized page
    pub target_page: &'static str,
    /// Human-readable name, written in the language itself
    pub display_name: &'static str,
    pub display_glyph: &'static str,
}

lazy_static! {
    /// Static lookup table of every localized page, keyed by language.
    pub static ref LANGUAGE_TABLE: HashMap<LanguageCode, LanguageEntry> = {
        let entries = [
            LanguageEntry {
                code: LanguageCode::En,
                target_page: "en.html",
                display_name: "English",
                display_glyph: "🇬🇧",
            },
            LanguageEntry {
                code: LanguageCode::Uk,
                target_page: "uk.html",
                display_name: "Українська",
                display_glyph: "🇺🇦",
            },
            LanguageEntry {
                code: LanguageCode::Fa,
                target_page: "fa.html",
                display_name: "فارسی",
                display_glyph: "🇮🇷",
            },
        ];
        entries.into_iter().map(|entry| (entry.code, entry)).collect()
    };
}
