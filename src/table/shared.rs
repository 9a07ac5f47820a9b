//! Cloneable handle to a table shared between threads.

use std::sync::{Arc, RwLock};

use super::LocalizationTable;

/// Reader/writer-locked wrapper for exposing one table to concurrent
/// callers. Loads and language changes take the write lock so readers
/// never observe a partially rebuilt table; lookups take the read lock
/// and hand back owned strings.
#[derive(Debug, Clone, Default)]
pub struct SharedTable {
    inner: Arc<RwLock<LocalizationTable>>,
}

impl SharedTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_document(&self, text: &str) {
        self.inner.write().unwrap().load_document(text);
    }

    pub fn get_value(&self, language: &str, key: &str) -> String {
        self.inner
            .read()
            .unwrap()
            .get_value(language, key)
            .to_string()
    }

    pub fn set_active_language(&self, language: &str) {
        self.inner.write().unwrap().set_active_language(language);
    }

    pub fn active_language(&self) -> String {
        self.inner.read().unwrap().active_language().to_string()
    }

    pub fn value(&self, key: &str) -> String {
        self.inner.read().unwrap().value(key).to_string()
    }

    /// Run `f` with the read lock held, for bulk introspection like key
    /// listings or coverage reports.
    pub fn with_read<R>(&self, f: impl FnOnce(&LocalizationTable) -> R) -> R {
        f(&self.inner.read().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_the_same_table() {
        let table = SharedTable::new();
        let other = table.clone();
        table.load_document("Key,EN\nhello,Hi");
        assert_eq!(other.get_value("EN", "hello"), "Hi");
    }

    #[test]
    fn readers_on_other_threads_see_finished_loads() {
        let table = SharedTable::new();
        table.load_document("Key,EN\nhello,Hi");
        table.set_active_language("EN");

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let table = table.clone();
                thread::spawn(move || table.value("hello"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "Hi");
        }
    }
}
