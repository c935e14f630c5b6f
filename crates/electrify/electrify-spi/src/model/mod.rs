//! Model module containing the dashboard's data types

mod config;
mod dataset;
mod forecast;
mod heat_map;
mod metric;
mod recommendation;
mod report;
mod selection;
mod series;
mod upload;

pub use config::{DashboardConfig, HorizonBounds, ModelOrder};
pub use dataset::Dataset;
pub use forecast::{ForecastResult, ModelSummary, ProviderForecast};
pub use heat_map::HeatMap;
pub use metric::Metric;
pub use recommendation::{Outlook, Recommendation};
pub use report::{DashboardReport, ForecastChart, Halt, Section, TrendChart};
pub use selection::{Controls, Selection, SelectionRequest};
pub use series::{CountrySeries, SeriesPoint};
pub use upload::Upload;
