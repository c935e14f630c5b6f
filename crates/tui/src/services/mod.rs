//! Service layer for TUI operations.

mod data_loader;

pub use data_loader::{read_upload, LoadError};
