//! Trait for forecast providers

use crate::error::Result;
use crate::model::{ModelOrder, ProviderForecast};

/// A univariate time-series model that can be fitted and projected in one call.
///
/// Implementations receive the observed values in time order and return
/// exactly `horizon` projected values plus a textual model summary. Any fit
/// failure is reported as an error; callers do not retry.
pub trait ForecastProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Fewest observations the provider can fit with `order`.
    fn min_observations(&self, _order: ModelOrder) -> usize {
        1
    }

    /// Fit a model of the given order to `values` and project `horizon` steps.
    fn forecast(&self, values: &[f64], order: ModelOrder, horizon: usize)
        -> Result<ProviderForecast>;
}
