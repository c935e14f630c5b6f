//! Electrification Dashboard Facade
//!
//! High-level entry point for front ends. Re-exports all public types from
//! the dashboard stack.

// Re-export everything from API (which includes SPI and core)
pub use electrify_api::*;

// Explicit re-exports for documentation
pub use electrify_api::prelude;

// Re-export core modules for direct access
pub use electrify_core::{cache, forecast, heat_map, loader, selection, table, trend};
