#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicU32, Ordering};

use serial_test::serial;

use super::locale::{detect_locale_with, normalize_locale};
use super::*;

const TABLE: &str = r#"{
    "de": {
        "Updating packages...": "pakete werden aktualisiert...",
        "Download progress": "  Download-Fortschritt  "
    },
    "JA": { "Updating packages...": "パッケージを更新しています..." }
}"#;

fn table_translator(locale: &str) -> Translator {
    Translator::new(locale, Box::new(TableCatalog::from_json(TABLE).expect("table")))
}

/// Catalog that fails transiently a fixed number of times before answering
struct FlakyCatalog {
    failures: u32,
    calls: AtomicU32,
}

impl Catalog for FlakyCatalog {
    fn supports(&self, _locale: &str) -> bool {
        true
    }

    fn lookup(&self, _locale: &str, text: &str) -> std::result::Result<Option<String>, LookupError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.failures {
            Err(LookupError::Transient("busy".to_string()))
        } else {
            Ok(Some(format!("übersetzt: {text}")))
        }
    }
}

#[test]
fn test_translates_and_capitalizes() {
    let translator = table_translator("de");
    assert_eq!(
        translator.translate(NORMAL_INSTALL_TEXT),
        "Pakete werden aktualisiert..."
    );
    assert_eq!(translator.translate(TITLE_TEXT), "Download-Fortschritt");
}

#[test]
fn test_missing_entry_falls_back_to_source() {
    let translator = table_translator("de");
    assert_eq!(translator.translate(BULK_INSTALL_TEXT), BULK_INSTALL_TEXT);
}

#[test]
fn test_unknown_locale_falls_back_to_source() {
    let translator = table_translator("fr");
    assert_eq!(translator.translate("updating packages..."), "Updating packages...");
}

#[test]
fn test_english_is_never_looked_up() {
    let catalog = FlakyCatalog {
        failures: 0,
        calls: AtomicU32::new(0),
    };
    let translator = Translator::new("en", Box::new(catalog));
    assert_eq!(translator.translate("hello"), "Hello");
}

#[test]
fn test_uncased_locale_is_not_capitalized() {
    let translator = table_translator("ja");
    assert_eq!(
        translator.translate(NORMAL_INSTALL_TEXT),
        "パッケージを更新しています..."
    );
}

#[test]
fn test_empty_text_is_returned_as_is() {
    assert_eq!(table_translator("de").translate(""), "");
}

#[test]
fn test_transient_failures_are_retried() {
    let translator = Translator::new(
        "de",
        Box::new(FlakyCatalog {
            failures: 3,
            calls: AtomicU32::new(0),
        }),
    );
    assert_eq!(translator.translate("text"), "Übersetzt: text");
}

#[test]
fn test_retries_are_bounded() {
    let catalog = FlakyCatalog {
        failures: u32::MAX,
        calls: AtomicU32::new(0),
    };
    let translator = Translator::new("de", Box::new(catalog));
    assert_eq!(translator.translate("text"), "Text");
}

#[test]
fn test_labels_switch_on_bulk_flag() {
    let labels = Labels::new(&Translator::passthrough());
    assert_eq!(labels.for_step(false), NORMAL_INSTALL_TEXT);
    assert_eq!(labels.for_step(true), BULK_INSTALL_TEXT);
    assert_eq!(labels.title, "Download progress");
}

#[test]
fn test_normalize_locale() {
    assert_eq!(normalize_locale("de_DE.UTF-8").as_deref(), Some("de"));
    assert_eq!(normalize_locale("fr_FR@euro").as_deref(), Some("fr"));
    assert_eq!(normalize_locale("zh_TW.UTF-8").as_deref(), Some("zh-tw"));
    assert_eq!(normalize_locale("zh-CN").as_deref(), Some("zh-cn"));
    assert_eq!(normalize_locale("ja").as_deref(), Some("ja"));
    assert_eq!(normalize_locale("C.UTF-8"), None);
    assert_eq!(normalize_locale("POSIX"), None);
    assert_eq!(normalize_locale(""), None);
    assert_eq!(normalize_locale("_US"), None);
}

#[test]
fn test_detect_locale_priority() {
    let env = |name: &str| match name {
        "LC_ALL" => Some(String::new()),
        "LC_MESSAGES" => Some("C".to_string()),
        "LANG" => Some("it_IT.UTF-8".to_string()),
        _ => None,
    };
    assert_eq!(detect_locale_with(None, env), "it");
    assert_eq!(detect_locale_with(Some("pt_BR"), env), "pt");
    assert_eq!(detect_locale_with(Some("C"), env), "it");
}

#[test]
fn test_detect_locale_defaults_to_english() {
    assert_eq!(detect_locale_with(None, |_| None), DEFAULT_LOCALE);
}

#[test]
#[serial]
fn test_detect_locale_reads_environment() {
    let saved: Vec<_> = ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .map(|name| (*name, std::env::var_os(name)))
        .collect();

    // SAFETY: serialized with every other test touching the environment.
    unsafe {
        std::env::remove_var("LC_ALL");
        std::env::remove_var("LC_MESSAGES");
        std::env::set_var("LANG", "es_ES.UTF-8");
    }
    assert_eq!(detect_locale(None), "es");

    unsafe {
        for (name, value) in saved {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}
