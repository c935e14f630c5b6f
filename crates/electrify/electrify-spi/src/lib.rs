//! Electrification Dashboard Service Provider Interface
//!
//! Defines the data model shared by every layer of the dashboard (datasets,
//! selections, series, forecasts and report sections), the pluggable
//! [`ForecastProvider`] contract, and the error type.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ForecastProvider;
pub use error::{DashboardError, Result};
pub use model::{
    Controls, CountrySeries, DashboardConfig, DashboardReport, Dataset, ForecastChart,
    ForecastResult, Halt, HeatMap, HorizonBounds, Metric, ModelOrder, ModelSummary, Outlook,
    ProviderForecast, Recommendation, Section, SeriesPoint, Selection, SelectionRequest,
    TrendChart, Upload,
};
