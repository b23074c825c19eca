//! CSV loading for the scraped quotes dump.

use anyhow::Context;
use polars::prelude::*;
use std::path::Path;

use crate::types::RawQuote;

/// Load quote records from a CSV file with a header row.
///
/// Expected columns: quote, author, tags (extra columns are ignored).
/// Fields are taken verbatim, in input row order; null cells read as empty
/// strings. A missing file or a missing required column is fatal.
pub fn load_quotes<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<RawQuote>> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))
        .with_context(|| format!("Failed to open quotes CSV: {}", path.as_ref().display()))?
        .finish()
        .with_context(|| format!("Failed to read quotes CSV: {}", path.as_ref().display()))?;

    let quotes = df
        .column("quote")
        .context("quotes CSV is missing the 'quote' column")?
        .str()?;
    let authors = df
        .column("author")
        .context("quotes CSV is missing the 'author' column")?
        .str()?;
    let tags = df
        .column("tags")
        .context("quotes CSV is missing the 'tags' column")?
        .str()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        records.push(RawQuote {
            quote: quotes.get(i).unwrap_or("").to_string(),
            author: authors.get(i).unwrap_or("").to_string(),
            tags: tags.get(i).unwrap_or("").to_string(),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "quotes.csv",
            "quote,author,tags\n\
             \"Stay hungry.\",Steve Jobs,\"['inspirational', 'work']\"\n\
             \"Know thyself.\",Socrates,\"['philosophy']\"\n",
        );

        let records = load_quotes(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].quote, "Stay hungry.");
        assert_eq!(records[0].author, "Steve Jobs");
        assert_eq!(records[0].tags, "['inspirational', 'work']");
        assert_eq!(records[1].author, "Socrates");
    }

    #[test]
    fn test_fields_kept_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "quotes.csv",
            "quote,author,tags,extra\n\
             \"  padded  \",\"Anonymous,\",not a list,ignored\n",
        );

        let records = load_quotes(&path).unwrap();
        assert_eq!(records.len(), 1);
        // No trimming, no tag validation at load time
        assert_eq!(records[0].quote, "  padded  ");
        assert_eq!(records[0].author, "Anonymous,");
        assert_eq!(records[0].tags, "not a list");
    }

    #[test]
    fn test_missing_column_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "quotes.csv", "quote,author\nhello,world\n");

        let err = load_quotes(&path).unwrap_err();
        assert!(err.to_string().contains("tags"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_quotes(dir.path().join("absent.csv")).is_err());
    }
}
