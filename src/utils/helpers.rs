//! Utility functions and helpers for the terminal front-end
//!
//! This module turns process input (arguments, environment, console lines)
//! into the values the redirect controller works with.

use crate::ui::language::LanguageCode;

/// Command typed on the console while the notice is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Cancel,
    Select(LanguageCode),
}

/// Parse one console line. `None` for anything unrecognised.
pub fn parse_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim().to_lowercase();
    match trimmed.as_str() {
        "c" | "cancel" | "stay" => Some(ConsoleCommand::Cancel),
        other => LanguageCode::from_code(other).map(ConsoleCommand::Select),
    }
}

/// Turn a POSIX locale such as `uk_UA.UTF-8` or `fa_IR@calendar` into a
/// hyphenated tag. Returns `None` for empty values and the `C`/`POSIX` locales.
pub fn normalize_locale_tag(raw: &str) -> Option<String> {
    let stripped = raw.trim().split(['.', '@']).next().unwrap_or_default().trim();
    if stripped.is_empty() || stripped.eq_ignore_ascii_case("c") || stripped.eq_ignore_ascii_case("posix") {
        return None;
    }
    Some(stripped.replace('_', "-"))
}

/// Ranked language preferences for this process.
///
/// Command-line arguments win (each may hold a comma-separated list, the way
/// an `Accept-Language` header does). Without arguments the `LANGUAGE`
/// priority list is used, then `LANG`.
pub fn collect_language_tags<I, F>(args: I, env: F) -> Vec<String>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    let from_args: Vec<String> = args
        .into_iter()
        .flat_map(|arg| arg.split(',').map(str::to_string).collect::<Vec<_>>())
        .filter_map(|tag| {
            // drop quality weights such as ";q=0.8"
            let tag = tag.split(';').next().unwrap_or_default().trim().to_string();
            (!tag.is_empty()).then_some(tag)
        })
        .collect();
    if !from_args.is_empty() {
        return from_args;
    }

    let mut tags: Vec<String> = env("LANGUAGE")
        .map(|list| list.split(':').filter_map(normalize_locale_tag).collect())
        .unwrap_or_default();
    if let Some(lang) = env("LANG").as_deref().and_then(normalize_locale_tag) {
        if !tags.contains(&lang) {
            tags.push(lang);
        }
    }
    tags
}
