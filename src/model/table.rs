//! Raw table records and their grid markup rendering.

use serde::{Deserialize, Serialize};

/// A raw table as supplied by the external page parser: rows of optional
/// cell strings, first row is the header. Passed through opaquely; the only
/// operation this crate applies is rendering to grid markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    /// Table rows; `rows[0]` is the header row
    pub rows: Vec<Vec<Option<String>>>,
}

/// Per-table row/column counts for page statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    /// Number of data rows (header excluded)
    pub rows: usize,
    /// Number of columns (header width)
    pub cols: usize,
}

impl RawTable {
    /// Create a table from rows. The first row is treated as the header.
    pub fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Create a table from plain string rows, for fixtures and tests.
    pub fn from_strings<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| Some(cell.into())).collect())
                .collect(),
        }
    }

    /// Whether the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header row, if present.
    pub fn header(&self) -> Option<&[Option<String>]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// Data rows (everything after the header).
    pub fn body(&self) -> &[Vec<Option<String>>] {
        if self.rows.len() > 1 {
            &self.rows[1..]
        } else {
            &[]
        }
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Number of columns (header width).
    pub fn column_count(&self) -> usize {
        self.header().map(|h| h.len()).unwrap_or(0)
    }

    /// Row/column counts: data rows and header width.
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            rows: self.row_count(),
            cols: self.column_count(),
        }
    }

    /// Render the table as fixed grid markup: header row, a separator row of
    /// dashes, then data rows. Missing cells render as empty strings.
    pub fn to_markup(&self) -> String {
        let Some(header) = self.header() else {
            return String::new();
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(format_row(header));
        lines.push(format!(
            "|{}|",
            vec!["---"; header.len()].join("|")
        ));
        for row in self.body() {
            lines.push(format_row(row));
        }
        lines.join("\n")
    }
}

fn format_row(cells: &[Option<String>]) -> String {
    let rendered: Vec<&str> = cells.iter().map(|c| c.as_deref().unwrap_or("")).collect();
    format!("| {} |", rendered.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let table = RawTable::from_strings([vec!["Name", "Age"], vec!["Alice", "30"]]);
        let summary = table.summary();
        assert_eq!(summary.rows, 1);
        assert_eq!(summary.cols, 2);
    }

    #[test]
    fn test_summary_empty() {
        let table = RawTable::new(vec![]);
        assert!(table.is_empty());
        assert_eq!(table.summary(), TableSummary { rows: 0, cols: 0 });
    }

    #[test]
    fn test_to_markup() {
        let table = RawTable::from_strings([
            vec!["Name", "Age"],
            vec!["Alice", "30"],
            vec!["Bob", "25"],
        ]);
        let markup = table.to_markup();
        let lines: Vec<&str> = markup.lines().collect();
        assert_eq!(lines[0], "| Name | Age |");
        assert_eq!(lines[1], "|---|---|");
        assert_eq!(lines[2], "| Alice | 30 |");
        assert_eq!(lines[3], "| Bob | 25 |");
    }

    #[test]
    fn test_to_markup_missing_cells() {
        let table = RawTable::new(vec![
            vec![Some("A".to_string()), Some("B".to_string())],
            vec![None, Some("x".to_string())],
        ]);
        let markup = table.to_markup();
        assert!(markup.contains("|  | x |"));
    }

    #[test]
    fn test_to_markup_empty_table() {
        assert_eq!(RawTable::new(vec![]).to_markup(), "");
    }
}
