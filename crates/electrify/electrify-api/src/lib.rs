//! Electrification Dashboard Consumer API
//!
//! Configuration loading and a builder for [`Dashboard`], plus re-exports
//! from the SPI and core crates.

use std::fs;
use std::path::Path;
use std::sync::Arc;

// Re-export from core
pub use electrify_core::{
    content, load_csv, load_csv_bytes, load_csv_file, recommend, render_text, upload_key,
    Arima, ArimaProvider, CacheStats, Dashboard, DatasetCache, ForecastEngine,
};

// Re-export from SPI
pub use electrify_spi::{
    Controls, CountrySeries, DashboardConfig, DashboardError, DashboardReport, Dataset,
    ForecastChart, ForecastProvider, ForecastResult, Halt, HeatMap, HorizonBounds, Metric,
    ModelOrder, ModelSummary, Outlook, ProviderForecast, Recommendation, Result, Section,
    Selection, SelectionRequest, SeriesPoint, TrendChart, Upload,
};

/// Load and validate a JSON [`DashboardConfig`]. Omitted fields keep their defaults.
pub fn load_config(path: &Path) -> Result<DashboardConfig> {
    let raw = fs::read_to_string(path)
        .map_err(|e| DashboardError::Config(format!("{}: {}", path.display(), e)))?;
    let config: DashboardConfig = serde_json::from_str(&raw)
        .map_err(|e| DashboardError::Config(format!("{}: {}", path.display(), e)))?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "loaded dashboard config");
    Ok(config)
}

/// Load `path` if given, otherwise the defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<DashboardConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(DashboardConfig::default()),
    }
}

/// Builder for [`Dashboard`].
#[derive(Default)]
pub struct DashboardBuilder {
    config: DashboardConfig,
    provider: Option<Arc<dyn ForecastProvider>>,
}

impl DashboardBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the model order.
    pub fn order(mut self, order: ModelOrder) -> Self {
        self.config.order = order;
        self
    }

    /// Set the universal-access threshold in percent.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set the minimum number of observed years.
    pub fn min_observations(mut self, min: usize) -> Self {
        self.config.min_observations = min;
        self
    }

    /// Set the horizon slider bounds.
    pub fn horizon(mut self, horizon: HorizonBounds) -> Self {
        self.config.horizon = horizon;
        self
    }

    /// Set the upload cache capacity.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    /// Use a custom forecast provider instead of ARIMA.
    pub fn provider(mut self, provider: Arc<dyn ForecastProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Validate the configuration and build the dashboard.
    pub fn build(self) -> Result<Dashboard> {
        match self.provider {
            Some(provider) => Dashboard::with_provider(self.config, provider),
            None => Dashboard::new(self.config),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{load_config, load_config_or_default, DashboardBuilder};
    pub use electrify_core::{render_text, Dashboard};
    pub use electrify_spi::{
        DashboardConfig, DashboardError, DashboardReport, ForecastProvider, Halt, Metric,
        ModelOrder, Result, Section, SelectionRequest, Upload,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"threshold": 95.0, "order": {{"p": 2, "d": 1, "q": 0}}}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.threshold, 95.0);
        assert_eq!(config.order, ModelOrder::new(2, 1, 0));
        assert_eq!(config.min_observations, 6);
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"horizon": {{"min": 5, "max": 3, "default": 4}}}}"#).unwrap();
        assert!(matches!(
            load_config(file.path()),
            Err(DashboardError::Config(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config(Path::new("/no/such/config.json")).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_default_when_no_path() {
        assert_eq!(load_config_or_default(None).unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_builder_applies_settings() {
        let dashboard = DashboardBuilder::new()
            .threshold(80.0)
            .min_observations(8)
            .cache_capacity(2)
            .build()
            .unwrap();
        assert_eq!(dashboard.config().threshold, 80.0);
        assert_eq!(dashboard.engine().min_observations(), 8);
    }

    #[test]
    fn test_builder_validates() {
        let result = DashboardBuilder::new().order(ModelOrder::new(1, 5, 1)).build();
        assert!(result.is_err());
    }
}
