//! coverage.rs
//!
//! Loads every document under `TABLES_DIR` (default "tables") and prints a
//! per-language coverage report as pretty JSON: how many keys each
//! language translates and which ones it is missing.

use anyhow::Result;
use loctables::{discover, table::coverage, LocalizationTable};
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

    let report = coverage::report(&table);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
