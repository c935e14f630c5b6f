//! Reusable widgets for the TUI.

mod chart;
mod heat_map;

pub use chart::{create_forecast_chart, create_trend_chart, series_points};
pub use heat_map::heat_map_lines;
