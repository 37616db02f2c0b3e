//! Tabular dataset snapshot.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Static table loaded once for display.
///
/// Cells are kept as text exactly as they appear in the source file;
/// the dashboard never computes on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Where the table was read from
    pub source: PathBuf,
    /// Column names
    pub headers: Vec<String>,
    /// Records; rows may be shorter than `headers`
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(source: impl Into<PathBuf>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            source: source.into(),
            headers,
            rows,
        }
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Cell text, empty when the record is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map_or("", String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
