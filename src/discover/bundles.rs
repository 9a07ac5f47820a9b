//! Zip bundles of localization CSVs, the packed-asset analogue of a
//! directory of loose tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use zip::ZipArchive;

use super::TableSource;

/// Extract every `.csv` entry of a zip bundle as one document, named by
/// the entry's file stem. Non-CSV entries are ignored; non-UTF8 content is
/// tolerated via lossy conversion.
pub fn read_bundle(path: &Path) -> Result<Vec<TableSource>> {
    let file = File::open(path).with_context(|| format!("opening bundle {:?}", path))?;
    let mut archive =
        ZipArchive::new(file).with_context(|| format!("reading bundle {:?}", path))?;

    let mut sources = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("accessing entry #{} in {:?}", i, path))?;
        let name = entry.name().to_string();
        if !entry.is_file() || !name.to_lowercase().ends_with(".csv") {
            continue;
        }

        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut buf)
            .with_context(|| format!("reading {} into memory", name))?;
        let stem = Path::new(&name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&name)
            .to_string();
        sources.push(TableSource {
            name: stem,
            text: String::from_utf8_lossy(&buf).to_string(),
        });
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use zip::write::SimpleFileOptions;
    use zip::CompressionMethod;

    #[test]
    fn extracts_csv_entries_and_ignores_the_rest() -> Result<()> {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(std::io::Cursor::new(&mut buf));
            let options =
                SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
            zip.start_file("ui/menus.CSV", options.clone())?;
            zip.write_all(b"Key,EN\nplay,Play")?;
            zip.start_file("notes.txt", options)?;
            zip.write_all(b"not a table")?;
            zip.finish()?;
        }

        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(&buf)?;

        let sources = read_bundle(tmp.path())?;
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "menus");
        assert_eq!(sources[0].text, "Key,EN\nplay,Play");
        Ok(())
    }
}
