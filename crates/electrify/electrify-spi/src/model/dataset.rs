//! Normalized in-memory table.

use serde::Serialize;

use crate::error::{DashboardError, Result};

/// A loaded CSV table with lowercased column names.
///
/// Cells are kept as whitespace-trimmed strings. Typed access happens
/// downstream, so a malformed file only fails at the point a view needs the
/// offending column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn trimmed(cell: String) -> String {
    match cell.trim() {
        t if t.len() == cell.len() => cell,
        t => t.to_string(),
    }
}

impl Dataset {
    /// Build a dataset, lowercasing column names and trimming every cell.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let columns = columns
            .into_iter()
            .map(|c| c.trim().to_lowercase())
            .collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(trimmed).collect())
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Position of `name` among the columns.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DashboardError::MissingColumn(name.to_string()))
    }

    /// Cell at `row`/`col`; short rows read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}
