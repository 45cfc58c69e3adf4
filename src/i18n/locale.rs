//! Locale detection
//!
//! POSIX locale strings look like `de_DE.UTF-8@euro`. Only the language is
//! kept, except for Chinese where the region selects the script (`zh-cn`,
//! `zh-tw`).

use std::env;

/// Locale used when nothing usable is configured or detected
pub const DEFAULT_LOCALE: &str = "en";

/// Environment variables consulted, highest priority first
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Reduce a raw locale string to a lookup code, `None` if unusable
pub fn normalize_locale(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let raw = raw.split(['.', '@']).next().unwrap_or_default();
    if raw.is_empty() || raw.eq_ignore_ascii_case("c") || raw.eq_ignore_ascii_case("posix") {
        return None;
    }

    let mut parts = raw.split(['_', '-']);
    let language = parts.next()?.to_lowercase();
    if language.is_empty() {
        return None;
    }

    match (language.as_str(), parts.next()) {
        ("zh", Some(region)) if !region.is_empty() => Some(format!("zh-{}", region.to_lowercase())),
        _ => Some(language),
    }
}

pub(super) fn detect_locale_with<F>(configured: Option<&str>, var: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    configured
        .and_then(normalize_locale)
        .or_else(|| {
            LOCALE_VARS
                .iter()
                .filter_map(|name| var(name))
                .find_map(|value| normalize_locale(&value))
        })
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Active locale: configured override, then environment, then [`DEFAULT_LOCALE`]
pub fn detect_locale(configured: Option<&str>) -> String {
    detect_locale_with(configured, |name| env::var(name).ok())
}
