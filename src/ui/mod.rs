//! Presentation: language table, localized strings, presenters, navigation target.

pub mod language;
pub mod localization;
pub mod localization_key;
pub mod navigator;
pub mod presenter;
pub mod terminal;
