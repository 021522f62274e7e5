//! Localization module for multilingual support
//!
//! This module provides the translated strings shown by the terminal
//! front-end in each of the guide's languages.

use crate::ui::language::LanguageCode;
pub use crate::ui::localization_key::LocalizationKey;

/// Localization system for multilingual support
#[derive(Debug, Clone, Copy)]
pub struct Localization {
    pub language: LanguageCode,
}

impl Localization {
    /// Create a new localization instance for the specified language
    pub fn new(language: LanguageCode) -> Self {
        Self { language }
    }

    /// Get localized string for a given key
    pub fn get(&self, key: LocalizationKey) -> &'static str {
        match self.language {
            LanguageCode::En => key.get_english(),
            LanguageCode::Uk => key.get_ukrainian(),
            LanguageCode::Fa => key.get_persian(),
        }
    }

    pub fn get_detected_language(&self, name: &str) -> String {
        self.get(LocalizationKey::DetectedLanguage).replace("{}", name)
    }

    pub fn get_countdown(&self, remaining: u32) -> String {
        self.get(LocalizationKey::Countdown).replace("{}", &remaining.to_string())
    }

    pub fn get_redirecting(&self, page: &str) -> String {
        self.get(LocalizationKey::Redirecting).replace("{}", page)
    }

    pub fn get_preference_saved(&self, name: &str) -> String {
        self.get(LocalizationKey::PreferenceSaved).replace("{}", name)
    }

    pub fn get_unknown_command(&self, command: &str) -> String {
        self.get(LocalizationKey::UnknownCommand).replace("{}", command)
    }
}
