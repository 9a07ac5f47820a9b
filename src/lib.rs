//! CSV-backed multi-language string tables.
//!
//! `loctables` loads CSV documents whose header row names languages and
//! whose data rows are keyed by a translation key, merges them into one
//! `language → key → value` table, and answers point lookups with a
//! visible fallback-to-key policy so a missing translation shows up as
//! its key in a running UI instead of going blank.

pub mod cache;
pub mod discover;
pub mod parse;
pub mod table;

pub use discover::TableSource;
pub use table::shared::SharedTable;
pub use table::LocalizationTable;
