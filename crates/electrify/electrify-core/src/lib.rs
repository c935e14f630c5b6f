//! Electrification Dashboard Core
//!
//! Implementations behind the dashboard: CSV loading with a content-hash
//! cache, selection controls, the trend and heat-map views, the ARIMA
//! forecast provider, the recommendation narrative, and the pipeline that
//! assembles them into a [`DashboardReport`](electrify_spi::DashboardReport).

pub mod cache;
pub mod content;
pub mod dashboard;
pub mod forecast;
pub mod heat_map;
pub mod loader;
pub mod recommendation;
pub mod render;
pub mod selection;
pub mod table;
pub mod trend;

pub use cache::{upload_key, CacheStats, DatasetCache};
pub use dashboard::Dashboard;
pub use forecast::{Arima, ArimaProvider, ForecastEngine};
pub use loader::{load_csv, load_csv_bytes, load_csv_file};
pub use recommendation::recommend;
pub use render::render_text;
