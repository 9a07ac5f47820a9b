// src/discover/mod.rs
pub mod bundles;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glob::glob;
use tracing::{debug, info, warn};

use crate::cache::RefreshCache;
use crate::table::shared::SharedTable;

/// One named CSV document ready to load.
#[derive(Debug, Clone)]
pub struct TableSource {
    pub name: String,
    pub text: String,
}

/// Scan `dir` for localization documents.
///
/// Every `*.csv` file is one document named by its file stem, and every
/// `*.zip` bundle contributes one document per archived CSV. Sources come
/// back sorted by name so loads are deterministic.
pub fn discover_table_sources(dir: impl AsRef<Path>) -> Result<Vec<TableSource>> {
    let dir = dir.as_ref();
    let mut sources = Vec::new();

    let csv_pattern = format!("{}/*.csv", dir.display());
    for entry in glob(&csv_pattern).context("invalid glob pattern for csv discovery")? {
        let path = match entry {
            Ok(p) => p,
            Err(e) => {
                warn!("cannot read glob entry: {:?}", e);
                continue;
            }
        };
        let name = match path.file_stem().and_then(|s| s.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };
        let bytes = fs::read(&path).with_context(|| format!("reading {:?}", path))?;
        sources.push(TableSource {
            name,
            text: String::from_utf8_lossy(&bytes).to_string(),
        });
    }

    let zip_pattern = format!("{}/*.zip", dir.display());
    for entry in glob(&zip_pattern).context("invalid glob pattern for bundle discovery")? {
        let path = match entry {
            Ok(p) => p,
            Err(e) => {
                warn!("cannot read glob entry: {:?}", e);
                continue;
            }
        };
        sources
            .extend(bundles::read_bundle(&path).with_context(|| format!("bundle {:?}", path))?);
    }

    sources.sort_by(|a, b| a.name.cmp(&b.name));
    info!("discovered {} localization documents", sources.len());
    Ok(sources)
}

/// Outcome of one refresh pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RefreshStats {
    pub discovered: usize,
    pub loaded: usize,
    pub skipped: usize,
}

/// Discover documents under `dir` and load the ones whose content changed
/// since `cache` last saw them.
///
/// The first refresh loads everything; later refreshes reload only edited
/// documents, so a long-lived service can call this on every
/// tables-changed signal without re-parsing the world.
pub fn refresh_into(
    dir: impl AsRef<Path>,
    cache: &mut RefreshCache,
    table: &SharedTable,
) -> Result<RefreshStats> {
    let sources = discover_table_sources(dir)?;
    let mut stats = RefreshStats {
        discovered: sources.len(),
        ..Default::default()
    };

    for source in &sources {
        if cache.is_fresh(&source.name, &source.text) {
            debug!("'{}' unchanged, skipping", source.name);
            stats.skipped += 1;
            continue;
        }
        table.load_document(&source.text);
        cache.record(&source.name, &source.text);
        stats.loaded += 1;
    }

    Ok(stats)
}
