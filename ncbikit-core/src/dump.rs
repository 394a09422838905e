//! Row splitting shared by the NCBI `*.dmp` readers.

use crate::constants::{DUMP_FIELD_SEPARATOR, DUMP_ROW_TERMINATOR};

/// Split a dump row into trimmed fields.
///
/// Rows look like `a\t|\tb\t|\tc\t|`; the trailing terminator and
/// surrounding whitespace are dropped before splitting. Blank rows yield
/// `None`.
pub(crate) fn split_dump_row(line: &str) -> Option<Vec<&str>> {
    let row = line.trim_end();
    if row.trim().is_empty() {
        return None;
    }
    let row = row
        .strip_suffix(DUMP_ROW_TERMINATOR)
        .or_else(|| row.strip_suffix('|'))
        .unwrap_or(row);
    Some(row.split(DUMP_FIELD_SEPARATOR).map(str::trim).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_dump_row() {
        assert_eq!(
            split_dump_row("9606\t|\tHomo sapiens\t|\t\t|\tscientific name\t|\n"),
            Some(vec!["9606", "Homo sapiens", "", "scientific name"])
        );
        assert_eq!(split_dump_row("a\t|\tb"), Some(vec!["a", "b"]));
        assert_eq!(split_dump_row("1\t|\t\t|"), Some(vec!["1", ""]));
    }

    #[test]
    fn test_split_dump_row_blank() {
        assert_eq!(split_dump_row(""), None);
        assert_eq!(split_dump_row(" \t \n"), None);
    }
}
