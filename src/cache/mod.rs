//! Content-hash cache deciding which documents actually need a reload.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub digest: String,
    pub loaded_at: DateTime<Utc>,
}

/// Explicit per-loader cache keyed by document name.
///
/// Owned by whichever component drives discovery; a document is reloaded
/// only when its content hash differs from the one recorded here, so
/// repeated refreshes skip unchanged documents.
#[derive(Debug, Default)]
pub struct RefreshCache {
    entries: BTreeMap<String, CacheEntry>,
}

impl RefreshCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hex SHA-256 of a document body.
    pub fn digest(text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// True when `text` matches the digest recorded for `name`.
    pub fn is_fresh(&self, name: &str, text: &str) -> bool {
        self.entries
            .get(name)
            .map_or(false, |e| e.digest == Self::digest(text))
    }

    /// When `name` was last recorded, if ever.
    pub fn loaded_at(&self, name: &str) -> Option<DateTime<Utc>> {
        self.entries.get(name).map(|e| e.loaded_at)
    }

    /// Record `name` as loaded with its current content.
    pub fn record(&mut self, name: &str, text: &str) {
        self.entries.insert(
            name.to_string(),
            CacheEntry {
                digest: Self::digest(text),
                loaded_at: Utc::now(),
            },
        );
        debug!("recorded digest for '{}'", name);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_documents_are_stale() {
        let cache = RefreshCache::new();
        assert!(!cache.is_fresh("greetings", "Key,EN\nhello,Hi"));
    }

    #[test]
    fn recorded_documents_are_fresh_until_edited() {
        let mut cache = RefreshCache::new();
        let text = "Key,EN\nhello,Hi";
        cache.record("greetings", text);
        assert!(cache.is_fresh("greetings", text));
        assert!(cache.loaded_at("greetings").is_some());

        assert!(!cache.is_fresh("greetings", "Key,EN\nhello,Hey"));
    }

    #[test]
    fn digest_is_stable_hex_sha256() {
        assert_eq!(RefreshCache::digest("abc").len(), 64);
        assert_eq!(RefreshCache::digest("abc"), RefreshCache::digest("abc"));
        assert_ne!(RefreshCache::digest("abc"), RefreshCache::digest("abd"));
    }
}
