//! Series file reading.

use std::fs;
use std::path::Path;

use crate::error::{QuickplotError, Result};
use crate::series::SeriesCollection;

/// Reads plain-text series files into a [`SeriesCollection`].
///
/// One record per line: a label followed by two numeric fields, separated by
/// whitespace. The label may itself contain spaces; the last two fields of a
/// record are always the coordinates. Blank lines and lines starting with
/// `#` are skipped.
#[derive(Debug)]
pub struct SeriesReader;

impl SeriesReader {
    /// Read a series file from disk.
    pub fn read_file(path: &Path) -> Result<SeriesCollection> {
        let content = fs::read_to_string(path)
            .map_err(|source| QuickplotError::file_open(path.to_path_buf(), source))?;
        Self::parse(&content)
    }

    /// Parse series records from text.
    pub fn parse(content: &str) -> Result<SeriesCollection> {
        let mut collection = SeriesCollection::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let [label @ .., x, y] = fields.as_slice() else {
                return Err(QuickplotError::malformed_record(idx + 1, line));
            };
            if label.is_empty() {
                return Err(QuickplotError::malformed_record(idx + 1, line));
            }

            let point = (
                Self::parse_coord(x, idx + 1, line)?,
                Self::parse_coord(y, idx + 1, line)?,
            );
            collection.add_point(label.join(" "), point);
        }

        Ok(collection)
    }

    fn parse_coord(field: &str, line: usize, content: &str) -> Result<f64> {
        field
            .parse()
            .map_err(|_| QuickplotError::malformed_record(line, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_groups_records_by_label() {
        let collection = SeriesReader::parse("a 1 10\nb 2 10\na 2 11\n").unwrap();

        assert_eq!(collection.labels(), ["a", "b"]);
        assert_eq!(collection.points("a").unwrap(), [(1.0, 10.0), (2.0, 11.0)]);
        assert_eq!(collection.points("b").unwrap(), [(2.0, 10.0)]);
    }

    #[test]
    fn test_parse_allows_spaced_labels() {
        let collection = SeriesReader::parse("run one 1 10\nrun one 2 11\n").unwrap();

        assert_eq!(collection.labels(), ["run one"]);
        assert_eq!(
            collection.points("run one").unwrap(),
            [(1.0, 10.0), (2.0, 11.0)]
        );
    }

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let collection = SeriesReader::parse("# header\n\na 1 10\n   \n# tail\n").unwrap();

        assert_eq!(collection.labels(), ["a"]);
    }

    #[test]
    fn test_parse_rejects_short_record() {
        let err = SeriesReader::parse("a 1 10\nb 2\n").unwrap_err();

        assert!(matches!(
            err,
            QuickplotError::MalformedRecord { line: 2, .. }
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric_coordinate() {
        let err = SeriesReader::parse("a one 10\n").unwrap_err();

        assert!(matches!(
            err,
            QuickplotError::MalformedRecord { line: 1, .. }
        ));
    }
}
