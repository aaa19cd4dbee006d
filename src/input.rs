//! Input file parsing.

use std::path::Path;

use anyhow::{Context, Result};

/// Reads IP addresses from a CSV file.
///
/// The file has no header row and rows may have any number of columns; only
/// the first column is used, whitespace-trimmed. Blank lines are not rows.
/// A row whose first column is empty is kept as an empty string so that it
/// still counts towards the total; the driver skips it.
pub fn read_ips(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;

    let mut ips = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("Failed to read row {} of {}", index + 1, path.display()))?;
        if let Some(first) = record.get(0) {
            ips.push(first.trim().to_string());
        }
    }

    log::debug!("Read {} rows from {}", ips.len(), path.display());
    Ok(ips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_input(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write input");
        file.flush().expect("Failed to flush file");
        file
    }

    #[test]
    fn test_one_ip_per_line() {
        let file = write_input("1.1.1.1\n2.2.2.2\n");
        let ips = read_ips(file.path()).unwrap();
        assert_eq!(ips, vec!["1.1.1.1", "2.2.2.2"]);
    }

    #[test]
    fn test_first_column_is_used() {
        let file = write_input("1.1.1.1,first seen,2024-01-01\n2.2.2.2,second\n3.3.3.3\n");
        let ips = read_ips(file.path()).unwrap();
        assert_eq!(ips, vec!["1.1.1.1", "2.2.2.2", "3.3.3.3"]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let file = write_input("  1.1.1.1  \n\t2.2.2.2\n");
        let ips = read_ips(file.path()).unwrap();
        assert_eq!(ips, vec!["1.1.1.1", "2.2.2.2"]);
    }

    #[test]
    fn test_blank_lines_are_not_rows() {
        let file = write_input("1.1.1.1\n\n\n2.2.2.2\n");
        let ips = read_ips(file.path()).unwrap();
        assert_eq!(ips, vec!["1.1.1.1", "2.2.2.2"]);
    }

    #[test]
    fn test_empty_first_column_is_kept() {
        let file = write_input("1.1.1.1\n,orphan\n");
        let ips = read_ips(file.path()).unwrap();
        assert_eq!(ips, vec!["1.1.1.1", ""]);
    }

    #[test]
    fn test_quoted_fields() {
        let file = write_input("\"1.1.1.1\",\"a, b\"\n");
        let ips = read_ips(file.path()).unwrap();
        assert_eq!(ips, vec!["1.1.1.1"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = read_ips(&dir.path().join("absent.csv"));
        assert!(result.is_err());
    }
}
