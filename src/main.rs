use anyhow::Result;
use loctables::{cache::RefreshCache, discover, SharedTable};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 2) configure dirs ───────────────────────────────────────────
    let tables_dir = env::var("TABLES_DIR").unwrap_or_else(|_| "tables".into());

    // ─── 3) discover + load documents ────────────────────────────────
    let mut cache = RefreshCache::new();
    let table = SharedTable::new();
    let stats = discover::refresh_into(&tables_dir, &mut cache, &table)?;
    if stats.discovered == 0 {
        warn!("no localization documents under {}", tables_dir);
    }
    info!(
        "loaded {} of {} documents ({} unchanged)",
        stats.loaded, stats.discovered, stats.skipped
    );
    table.with_read(|t| {
        info!(
            "table holds {} languages, {} keys",
            t.language_count(),
            t.keys().len()
        );
    });

    // ─── 4) answer lookups from the command line ─────────────────────
    // usage: loctables <language> [key ...]
    let mut args = env::args().skip(1);
    if let Some(language) = args.next() {
        table.set_active_language(&language);
        for key in args {
            println!("{} = {}", key, table.value(&key));
        }
    }

    info!("all done");
    Ok(())
}
