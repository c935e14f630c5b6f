//! Reads CSV files from disk into uploads.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use electrify_facade::Upload;

/// Error type for data loading operations.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read file: {0}")]
    ReadError(String),

    #[error("Only .csv files can be loaded: {0}")]
    UnsupportedType(String),
}

/// Read `path` as an upload named after its file name.
///
/// Only files with a `.csv` extension are accepted.
pub fn read_upload(path: &Path) -> Result<Upload, LoadError> {
    let display = path.display().to_string();
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(LoadError::UnsupportedType(display));
    }

    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound(display.clone()),
        _ => LoadError::ReadError(format!("{}: {}", display, e)),
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or(display);
    Ok(Upload::new(name, bytes))
}
