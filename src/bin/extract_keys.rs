//! extract_keys.rs
//!
//! Prints the sorted union of translation keys across every document under
//! `TABLES_DIR` (default "tables"), one per line. Logs go to stderr so the
//! key list on stdout stays pipeable.

use anyhow::Result;
use loctables::{discover, LocalizationTable};
use std::env;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let tables_dir = env::var("TABLES_DIR").unwrap_or_else(|_| "tables".into());

    let mut table = LocalizationTable::new();
    for source in discover::discover_table_sources(&tables_dir)? {
        table.load_document(&source.text);
    }

    for key in table.keys() {
        println!("{}", key);
    }
    Ok(())
}
