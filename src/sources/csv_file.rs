use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;
use tracing::{error, info};

use super::normalize::{is_known_key, SourceRecord};

/// Column order for files without a header row.
const POSITIONAL_KEYS: [&str; 5] = ["author", "text", "publishedAt", "likeCount", "platform"];

/// Reads comment rows from a CSV file.
///
/// The first row is a header when any of its cells is a recognised field
/// name in any letter case; header cells keep their casing as keys.
/// Otherwise columns are taken positionally and rows with fewer than two
/// fields are skipped. Failures are logged and produce no records.
pub fn read_comments_csv(path: &Path) -> Vec<SourceRecord> {
    match try_read(path) {
        Ok(records) => {
            info!("Loaded {} comments from {}", records.len(), path.display());
            records
        }
        Err(e) => {
            error!("Error reading CSV file {}: {:#}", path.display(), e);
            Vec::new()
        }
    }
}

fn try_read(path: &Path) -> Result<Vec<SourceRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut rows = reader.records();
    let first = match rows.next() {
        Some(row) => row.context("Failed to parse CSV row")?,
        None => return Ok(Vec::new()),
    };

    let mut records = Vec::new();
    if first.iter().any(is_known_key) {
        let header: Vec<String> = first.iter().map(str::to_string).collect();
        for row in rows {
            let row = row.context("Failed to parse CSV row")?;
            records.push(keyed_record(&header, &row));
        }
    } else {
        records.extend(positional_record(&first));
        for row in rows {
            let row = row.context("Failed to parse CSV row")?;
            records.extend(positional_record(&row));
        }
    }

    Ok(records)
}

fn keyed_record(header: &[String], row: &StringRecord) -> SourceRecord {
    header
        .iter()
        .zip(row.iter())
        .fold(SourceRecord::new(), |record, (key, value)| {
            record.with(key.as_str(), value)
        })
}

fn positional_record(row: &StringRecord) -> Option<SourceRecord> {
    if row.len() < 2 {
        return None;
    }
    Some(
        POSITIONAL_KEYS
            .iter()
            .zip(row.iter())
            .fold(SourceRecord::new(), |record, (key, value)| {
                record.with(*key, value)
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Comment, Platform};
    use crate::sources::normalize::normalize_all;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_headered_file_with_aliases() {
        let file = csv_file(
            "username,comment,likes,platform\n\
             alice,\"Nice post, really\",7,facebook\n\
             bob,hello there,,\n",
        );
        let comments = normalize_all(&read_comments_csv(file.path()), Platform::Unknown);
        assert_eq!(
            comments,
            vec![
                Comment::new("alice", "Nice post, really", "", 7, Platform::Facebook),
                Comment::new("bob", "hello there", "", 0, Platform::Unknown),
            ]
        );
    }

    #[test]
    fn reads_headerless_file_positionally() {
        let file = csv_file(
            "Follower1,Loved this,2023-03-01,20,instagram\n\
             lonely\n\
             FakeUser, DM for collab ,2023-03-02,abc\n",
        );
        let comments = normalize_all(&read_comments_csv(file.path()), Platform::Unknown);
        assert_eq!(
            comments,
            vec![
                Comment::new("Follower1", "Loved this", "2023-03-01", 20, Platform::Instagram),
                Comment::new("FakeUser", "DM for collab", "2023-03-02", 0, Platform::Unknown),
            ]
        );
    }

    #[test]
    fn two_column_rows_get_defaults() {
        let file = csv_file("author,text\nSam,Really enjoyed the talk\n");
        let comments = normalize_all(&read_comments_csv(file.path()), Platform::Unknown);
        assert_eq!(
            comments,
            vec![Comment::new("Sam", "Really enjoyed the talk", "", 0, Platform::Unknown)]
        );
    }

    #[test]
    fn capitalised_header_is_not_read_as_a_comment() {
        let file = csv_file("Author,Text\nSam,Really enjoyed the talk\n");
        assert_eq!(
            read_comments_csv(file.path()),
            vec![SourceRecord::new()
                .with("Author", "Sam")
                .with("Text", "Really enjoyed the talk")]
        );
    }

    #[test]
    fn missing_file_yields_nothing() {
        let records = read_comments_csv(Path::new("/definitely/not/here.csv"));
        assert!(records.is_empty());
    }

    #[test]
    fn empty_file_yields_nothing() {
        let file = csv_file("");
        assert!(read_comments_csv(file.path()).is_empty());
    }
}
