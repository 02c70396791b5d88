use crate::config::{CAREER_COLUMN, URL_COLUMN};
use crate::model::{CareerRecord, InputError};
use std::path::Path;

/// Reads the input CSV into an ordered list of records.
///
/// The header row must contain both required columns; anything less is fatal
/// since there is nothing to scrape without it. Extra columns are ignored.
pub fn load_careers(path: &Path) -> Result<Vec<CareerRecord>, InputError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for required in [CAREER_COLUMN, URL_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(InputError::MissingColumn(required));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_input(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("career_videos.csv");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_rows_in_order() {
        let (_dir, path) = write_input("Career,URL\nNurse,http://a\nPilot,http://b\n");
        let records = load_careers(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].career, "Nurse");
        assert_eq!(records[0].url, "http://a");
        assert_eq!(records[1].career, "Pilot");
        assert_eq!(records[1].url, "http://b");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let (_dir, path) = write_input("Career,URL,Notes\nNurse,http://a,x\n");
        let records = load_careers(&path).unwrap();
        assert_eq!(records[0].career, "Nurse");
    }

    #[test]
    fn missing_url_column_is_fatal() {
        let (_dir, path) = write_input("Career,Link\nNurse,http://a\n");
        match load_careers(&path) {
            Err(InputError::MissingColumn(col)) => assert_eq!(col, "URL"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_careers(&dir.path().join("absent.csv")).is_err());
    }
}
