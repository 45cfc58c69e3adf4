//! Translation lookup tables

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::LookupError;
use crate::error::{LauncherError, Result};

/// Source of translations
///
/// [`TableCatalog`] is the built-in source. A catalog backed by a service
/// reports `LookupError::Transient` for failures worth retrying; the
/// translator retries those a bounded number of times.
pub trait Catalog: Send + Sync {
    /// Whether `locale` is a recognized locale of this catalog
    fn supports(&self, locale: &str) -> bool;

    /// Translation of `text`, `Ok(None)` when the table has no entry
    fn lookup(&self, locale: &str, text: &str) -> std::result::Result<Option<String>, LookupError>;
}

/// Table loaded from JSON: `{ "<locale>": { "<source text>": "<translation>" } }`
#[derive(Debug, Clone, Default)]
pub struct TableCatalog {
    table: HashMap<String, HashMap<String, String>>,
}

impl TableCatalog {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let table: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        let table = table
            .into_iter()
            .map(|(locale, entries)| (locale.to_lowercase(), entries))
            .collect();
        Ok(Self { table })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|e| LauncherError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl Catalog for TableCatalog {
    fn supports(&self, locale: &str) -> bool {
        self.table.contains_key(locale)
    }

    fn lookup(&self, locale: &str, text: &str) -> std::result::Result<Option<String>, LookupError> {
        let entries = self
            .table
            .get(locale)
            .ok_or_else(|| LookupError::Unavailable(format!("no table for locale '{locale}'")))?;
        Ok(entries.get(text).cloned())
    }
}
