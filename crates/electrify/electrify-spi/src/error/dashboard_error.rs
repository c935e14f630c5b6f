//! Dashboard error types

use thiserror::Error;

/// Errors that abort a dashboard run.
///
/// The two anticipated stop conditions (no upload, too few observations) are
/// not errors: they end the report with a [`crate::Halt`]. Everything here is
/// an unhandled failure that the front end surfaces as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// A required column is absent from the uploaded table
    #[error("Column '{0}' not found in dataset")]
    MissingColumn(String),

    /// A cell could not be parsed as the type its column requires
    #[error("Invalid value '{value}' in column '{column}' (row {row})")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    /// The upload is not well-formed CSV
    #[error("Failed to parse CSV: {0}")]
    Csv(String),

    /// The upload could not be read
    #[error("Failed to read file: {0}")]
    Io(String),

    /// Country or horizon outside the offered choices
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The forecast provider failed to fit or project
    #[error("Forecast failed: {0}")]
    Forecast(String),

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Io(err.to_string())
    }
}
