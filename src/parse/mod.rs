// src/parse/mod.rs
pub mod line;

pub use line::parse_line;

use tracing::warn;

/// One tokenized CSV document: the header row split out from the data rows.
/// Fields are kept exactly as parsed; trimming belongs to the table layer.
#[derive(Debug)]
pub struct RawDocument {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Break a document into lines on any `\r` / `\n`, dropping empty lines
/// wherever they appear so blank lines never shift row alignment.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(['\r', '\n']).filter(|l| !l.is_empty()).collect()
}

/// Tokenize a whole document. Returns `None` when fewer than two non-empty
/// lines remain, i.e. there is no header plus data to work with.
pub fn parse_document(text: &str) -> Option<RawDocument> {
    let lines = split_lines(text);
    if lines.len() < 2 {
        warn!("document has {} non-empty lines, skipping", lines.len());
        return None;
    }

    let headers = parse_line(lines[0]);
    let rows = lines[1..].iter().map(|l| parse_line(l)).collect();
    Some(RawDocument { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_handles_any_newline_variant() {
        assert_eq!(split_lines("a\r\nb\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn split_drops_blank_lines_anywhere() {
        assert_eq!(split_lines("a\n\n\nb\n\nc\n"), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_and_header_only_documents_parse_to_none() {
        assert!(parse_document("").is_none());
        assert!(parse_document("\n\r\n").is_none());
        assert!(parse_document("Key,EN,FR\n").is_none());
    }

    #[test]
    fn header_and_rows_are_tokenized() {
        let doc = parse_document("Key,EN,FR\nhello,Hi,Bonjour\nbye,Bye,Salut").unwrap();
        assert_eq!(doc.headers, vec!["Key", "EN", "FR"]);
        assert_eq!(doc.rows.len(), 2);
        assert_eq!(doc.rows[0], vec!["hello", "Hi", "Bonjour"]);
        assert_eq!(doc.rows[1], vec!["bye", "Bye", "Salut"]);
    }

    #[test]
    fn fields_stay_untrimmed() {
        let doc = parse_document("Key, EN \nhello, Hi ").unwrap();
        assert_eq!(doc.headers, vec!["Key", " EN "]);
        assert_eq!(doc.rows[0], vec!["hello", " Hi "]);
    }
}
