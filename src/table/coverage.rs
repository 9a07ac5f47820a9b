//! Translation coverage against the union of keys across the table.

use serde::Serialize;

use super::LocalizationTable;

#[derive(Debug, Serialize)]
pub struct LanguageCoverage {
    pub language: String,
    pub translated: usize,
    pub missing: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CoverageReport {
    pub total_keys: usize,
    pub languages: Vec<LanguageCoverage>,
}

/// Compare every loaded language against the union of keys, reporting how
/// many it translates and which keys it is missing.
pub fn report(table: &LocalizationTable) -> CoverageReport {
    let keys = table.keys();
    let languages = table
        .languages()
        .map(|language| {
            let missing: Vec<String> = keys
                .iter()
                .filter(|key| !table.contains(language, key))
                .map(|key| key.to_string())
                .collect();
            LanguageCoverage {
                language: language.to_string(),
                translated: keys.len() - missing.len(),
                missing,
            }
        })
        .collect();

    CoverageReport {
        total_keys: keys.len(),
        languages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_keys_per_language() {
        let mut table = LocalizationTable::new();
        table.load_document("Key,EN,FR\nhello,Hi,Bonjour\nbye,Bye");

        let report = report(&table);
        assert_eq!(report.total_keys, 2);

        let en = &report.languages[0];
        assert_eq!(en.language, "EN");
        assert_eq!(en.translated, 2);
        assert!(en.missing.is_empty());

        let fr = &report.languages[1];
        assert_eq!(fr.language, "FR");
        assert_eq!(fr.translated, 1);
        assert_eq!(fr.missing, vec!["bye"]);
    }

    #[test]
    fn empty_table_reports_nothing() {
        let report = report(&LocalizationTable::new());
        assert_eq!(report.total_keys, 0);
        assert!(report.languages.is_empty());
    }
}
