//! Error module containing error types and result aliases

mod dashboard_error;

pub use dashboard_error::DashboardError;

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
