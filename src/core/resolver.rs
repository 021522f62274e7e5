//! Browser language preference resolution

use tracing::debug;

use crate::ui::language::{LanguageCode, DEFAULT_LANGUAGE};

/// Leading component of a locale tag, lowercased: `"en"` for `"en-US"`.
pub fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split('-')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Map the browser's ranked language preferences to a supported language.
///
/// Tags are tried in order and the first one that matches wins, either
/// exactly by primary subtag or through the Persian and Ukrainian aliases.
/// Falls back to [`DEFAULT_LANGUAGE`] when nothing matches.
pub fn resolve_language<S: AsRef<str>>(tags: &[S]) -> LanguageCode {
    for tag in tags {
        let tag = tag.as_ref();
        let primary = primary_subtag(tag);

        if let Some(code) = LanguageCode::from_code(&primary) {
            debug!(tag, %code, "matched supported language");
            return code;
        }
        if is_persian_alias(tag, &primary) {
            debug!(tag, "matched Persian alias");
            return LanguageCode::Fa;
        }
        if is_ukrainian_alias(&primary) {
            debug!(tag, "matched Ukrainian alias");
            return LanguageCode::Uk;
        }
    }

    debug!(count = tags.len(), "no supported language in preferences, using default");
    DEFAULT_LANGUAGE
}

fn is_persian_alias(tag: &str, primary: &str) -> bool {
    matches!(primary, "fa" | "per") || tag.to_lowercase().contains("farsi")
}

fn is_ukrainian_alias(primary: &str) -> bool {
    matches!(primary, "uk" | "ukr")
}
