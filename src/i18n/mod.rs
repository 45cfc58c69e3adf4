//! User-facing text translation
//!
//! A [`Translator`] is built once at startup and handed to whatever shows
//! text. Translations come from a lookup table keyed by locale code (see
//! [`TableCatalog`]); any lookup problem falls back to the source text.
//!
//! Lookups that fail transiently are retried a bounded number of times
//! before giving up.

mod catalog;
mod locale;

#[cfg(test)]
mod tests;

use thiserror::Error;

pub use catalog::{Catalog, TableCatalog};
pub use locale::{DEFAULT_LOCALE, detect_locale};

use crate::config::LauncherConfig;

/// Upper bound on lookups for a single text when the catalog keeps
/// reporting transient failures
pub const MAX_LOOKUP_ATTEMPTS: u32 = 10;

/// Locales whose scripts have no letter case
const UNCASED_LOCALES: &[&str] = &["ja", "zh-cn", "zh-tw"];

/// Source texts shown during an update
pub const TITLE_TEXT: &str = "Download progress";
pub const NORMAL_INSTALL_TEXT: &str = "Updating packages...";
pub const BULK_INSTALL_TEXT: &str = "Updating pytorch, this may take a while...";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Worth retrying (e.g. a backend that is momentarily busy).
    /// [`TableCatalog`] never reports it; other [`Catalog`] implementations may.
    #[allow(dead_code)]
    #[error("transient lookup failure: {0}")]
    Transient(String),
    /// Retrying will not help
    #[error("translation unavailable: {0}")]
    Unavailable(String),
}

/// Translation service
pub struct Translator {
    locale: String,
    catalog: Box<dyn Catalog>,
}

impl Translator {
    pub fn new(locale: impl Into<String>, catalog: Box<dyn Catalog>) -> Self {
        Self {
            locale: locale.into(),
            catalog,
        }
    }

    /// Translator that returns every text unchanged
    #[cfg(test)]
    pub fn passthrough() -> Self {
        Self::new(DEFAULT_LOCALE, Box::new(TableCatalog::default()))
    }

    /// Locale from config or environment, table from the configured file.
    ///
    /// A missing or broken table is logged and replaced by an empty one.
    pub fn from_config(config: &LauncherConfig) -> Self {
        let locale = detect_locale(config.locale.as_deref());
        let catalog = match &config.translations {
            Some(path) => TableCatalog::load(path).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "cannot load translations, not translating");
                TableCatalog::default()
            }),
            None => TableCatalog::default(),
        };
        tracing::debug!(locale = %locale, "translator ready");
        Self::new(locale, Box::new(catalog))
    }

    /// Translate `text` into the active locale, falling back to `text`
    pub fn translate(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let translated = if self.is_source_locale() || !self.catalog.supports(&self.locale) {
            text.to_string()
        } else {
            self.lookup_with_retry(text).unwrap_or_else(|| text.to_string())
        };

        let translated = translated.trim();
        if UNCASED_LOCALES.contains(&self.locale.as_str()) {
            translated.to_string()
        } else {
            capitalize_first(translated)
        }
    }

    fn is_source_locale(&self) -> bool {
        self.locale.starts_with(DEFAULT_LOCALE)
    }

    fn lookup_with_retry(&self, text: &str) -> Option<String> {
        for attempt in 1..=MAX_LOOKUP_ATTEMPTS {
            match self.catalog.lookup(&self.locale, text) {
                Ok(found) => return found,
                Err(LookupError::Transient(reason)) => {
                    tracing::debug!(attempt, %reason, "translation lookup failed, retrying");
                }
                Err(LookupError::Unavailable(reason)) => {
                    tracing::warn!(%reason, "translation unavailable, not translating");
                    return None;
                }
            }
        }
        tracing::warn!(
            attempts = MAX_LOOKUP_ATTEMPTS,
            "failed to get translation, not translating"
        );
        None
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Labels of the progress display, translated once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub title: String,
    pub normal_install: String,
    pub bulk_install: String,
}

impl Labels {
    pub fn new(translator: &Translator) -> Self {
        Self {
            title: translator.translate(TITLE_TEXT),
            normal_install: translator.translate(NORMAL_INSTALL_TEXT),
            bulk_install: translator.translate(BULK_INSTALL_TEXT),
        }
    }

    /// Wording for the step about to run
    pub fn for_step(&self, is_bulk_dependency: bool) -> &str {
        if is_bulk_dependency {
            &self.bulk_install
        } else {
            &self.normal_install
        }
    }
}
