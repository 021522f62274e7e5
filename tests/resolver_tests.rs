//! Language resolution over browser preference lists

use resistance_guide::core::resolve_language;
use resistance_guide::{LanguageCode, DEFAULT_LANGUAGE};

const UNSUPPORTED: &[&str] = &["de-DE", "fr-FR", "ru", "zh-Hans-CN", "es-419", "x-klingon"];

#[test]
fn test_supported_code_wins_wherever_it_appears() {
    for code in LanguageCode::all() {
        for position in 0..=UNSUPPORTED.len() {
            let mut tags: Vec<String> = UNSUPPORTED.iter().map(|t| t.to_string()).collect();
            tags.insert(position, format!("{}-XX", code.code().to_uppercase()));
            assert_eq!(resolve_language(&tags), *code, "tags: {:?}", tags);
        }
    }
}

#[test]
fn test_earlier_preference_beats_later() {
    for first in LanguageCode::all() {
        for second in LanguageCode::all() {
            let tags = ["de".to_string(), first.code().to_string(), second.code().to_string()];
            assert_eq!(resolve_language(&tags), *first);
        }
    }
}

#[test]
fn test_unsupported_only_defaults_to_english() {
    assert_eq!(resolve_language(&["de-DE", "fr-FR"]), LanguageCode::En);
    assert_eq!(resolve_language(UNSUPPORTED), DEFAULT_LANGUAGE);
}

#[test]
fn test_persian_aliases() {
    assert_eq!(resolve_language(&["fa-IR"]), LanguageCode::Fa);
    assert_eq!(resolve_language(&["per"]), LanguageCode::Fa);
    assert_eq!(resolve_language(&["PER-ir"]), LanguageCode::Fa);
    assert_eq!(resolve_language(&["de", "x-FARSI-latn"]), LanguageCode::Fa);
    assert_eq!(resolve_language(&["farsi"]), LanguageCode::Fa);
}

#[test]
fn test_ukrainian_aliases() {
    assert_eq!(resolve_language(&["ukr"]), LanguageCode::Uk);
    assert_eq!(resolve_language(&["ukr-UA", "en"]), LanguageCode::Uk);
}

#[test]
fn test_alias_is_checked_before_moving_on() {
    // an aliased tag ranked first beats an exact match ranked later
    assert_eq!(resolve_language(&["per", "en"]), LanguageCode::Fa);
    assert_eq!(resolve_language(&["ukr", "fa"]), LanguageCode::Uk);
}

#[test]
fn test_empty_preferences() {
    let none: [&str; 0] = [];
    assert_eq!(resolve_language(&none), LanguageCode::En);
    assert_eq!(resolve_language(&["", "  "]), LanguageCode::En);
}
