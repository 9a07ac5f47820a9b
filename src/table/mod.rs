// src/table/mod.rs
pub mod coverage;
pub mod shared;

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::parse;

/// In-memory localization table: language → key → localized value.
///
/// Loads accumulate across documents: each document replaces only the
/// languages named in its own header and leaves the rest untouched.
/// Lookups that miss fall back to the key itself so untranslated strings
/// stay visible instead of going blank.
#[derive(Debug, Clone, Default)]
pub struct LocalizationTable {
    tables: BTreeMap<String, BTreeMap<String, String>>,
    active_language: String,
}

impl LocalizationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one CSV document into the table.
    ///
    /// Header column 0 is the key-column label and is ignored; columns ≥1
    /// name languages, each of which starts over from a fresh sub-table.
    /// Data rows upsert `(language, key)` pairs, so a later row with a
    /// duplicate key wins. Rows shorter than the header leave the excess
    /// languages without a value for that key. A document with fewer than
    /// two non-empty lines is a logged no-op.
    pub fn load_document(&mut self, text: &str) {
        let Some(doc) = parse::parse_document(text) else {
            return;
        };

        let languages: Vec<String> = doc.headers[1..]
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        for language in &languages {
            self.tables.insert(language.clone(), BTreeMap::new());
        }

        for row in &doc.rows {
            let key = row[0].trim();
            for (language, value) in languages.iter().zip(row.iter().skip(1)) {
                self.tables
                    .get_mut(language)
                    .expect("sub-table inserted for every header language")
                    .insert(key.to_string(), value.trim().to_string());
            }
        }

        debug!(
            "loaded document: {} languages, {} rows",
            languages.len(),
            doc.rows.len()
        );
    }

    /// Look up `key` in `language`.
    ///
    /// Returns the stored value when both are present; otherwise warns and
    /// returns the key itself as a visible placeholder.
    pub fn get_value<'a>(&'a self, language: &str, key: &'a str) -> &'a str {
        if let Some(value) = self.tables.get(language).and_then(|t| t.get(key)) {
            return value;
        }
        warn!(
            "localization key '{}' not found for language '{}'",
            key, language
        );
        key
    }

    /// Set the default lookup language. Deliberately unvalidated: an
    /// unknown language surfaces at lookup time as fallback-to-key.
    pub fn set_active_language(&mut self, language: &str) {
        self.active_language = language.to_string();
    }

    pub fn active_language(&self) -> &str {
        &self.active_language
    }

    /// Look up `key` in the active language.
    pub fn value<'a>(&'a self, key: &'a str) -> &'a str {
        self.get_value(&self.active_language, key)
    }

    /// Whether a translation exists for this exact `(language, key)` pair.
    pub fn contains(&self, language: &str, key: &str) -> bool {
        self.tables
            .get(language)
            .map_or(false, |t| t.contains_key(key))
    }

    /// Loaded languages, in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Sorted union of translation keys across every language.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = BTreeSet::new();
        for table in self.tables.values() {
            keys.extend(table.keys().map(String::as_str));
        }
        keys.into_iter().collect()
    }

    pub fn language_count(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
