//! CSV loading into a normalized [`Dataset`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use electrify_spi::{DashboardError, Dataset, Result};

fn csv_error(err: csv::Error) -> DashboardError {
    DashboardError::Csv(err.to_string())
}

/// Read a CSV table from any reader.
///
/// The first row is the header; column names are lowercased. Rows shorter
/// than the header are padded with empty cells, longer rows are rejected.
pub fn load_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(DashboardError::Csv("No columns to parse from file".to_string()));
    }
    let width = headers.len();

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(csv_error)?;
        if record.len() > width {
            return Err(DashboardError::Csv(format!(
                "row {} has {} fields, expected {}",
                i + 1,
                record.len(),
                width
            )));
        }
        let mut row: Vec<String> = record.iter().map(String::from).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    tracing::debug!(columns = width, rows = rows.len(), "parsed csv");
    Ok(Dataset::new(headers.iter().map(String::from).collect(), rows))
}

/// Read a CSV table from an in-memory upload.
pub fn load_csv_bytes(bytes: &[u8]) -> Result<Dataset> {
    load_csv(bytes)
}

/// Read a CSV table from disk.
pub fn load_csv_file(path: &Path) -> Result<Dataset> {
    let file = File::open(path)
        .map_err(|e| DashboardError::Io(format!("{}: {}", path.display(), e)))?;
    load_csv(BufReader::new(file))
}
