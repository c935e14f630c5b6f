//! Forecast engine.
//!
//! The engine owns the policy (model order, minimum series length) and maps
//! provider output onto calendar years. The model itself is delegated to a
//! [`ForecastProvider`]; [`ArimaProvider`] is the default.

mod arima;

use std::sync::Arc;

use electrify_spi::{
    CountrySeries, DashboardError, ForecastProvider, ForecastResult, ModelOrder, Result,
    SeriesPoint,
};

pub use arima::{Arima, ArimaProvider};

/// Fits one country's series and projects it forward.
#[derive(Clone)]
pub struct ForecastEngine {
    provider: Arc<dyn ForecastProvider>,
    order: ModelOrder,
    min_observations: usize,
}

impl std::fmt::Debug for ForecastEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastEngine")
            .field("provider", &self.provider.name())
            .field("order", &self.order)
            .field("min_observations", &self.min_observations)
            .finish()
    }
}

impl ForecastEngine {
    pub fn new(provider: Arc<dyn ForecastProvider>, order: ModelOrder, min_observations: usize) -> Self {
        Self {
            provider,
            order,
            min_observations,
        }
    }

    pub fn order(&self) -> ModelOrder {
        self.order
    }

    pub fn min_observations(&self) -> usize {
        self.min_observations
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Series length needed before the provider is called: the configured
    /// minimum or what the provider needs for the order, whichever is larger.
    pub fn required_observations(&self) -> usize {
        self.min_observations
            .max(self.provider.min_observations(self.order))
            .max(1)
    }

    /// Whether `series` is long enough to be forecast.
    pub fn is_forecastable(&self, series: &CountrySeries) -> bool {
        series.len() >= self.required_observations()
    }

    /// Forecast `horizon` years past the last observation.
    pub fn forecast(&self, series: &CountrySeries, horizon: usize) -> Result<ForecastResult> {
        let (first_year, last_year) = match (series.first_year(), series.last_year()) {
            (Some(first), Some(last)) if self.is_forecastable(series) => (first, last),
            _ => {
                return Err(DashboardError::InsufficientData {
                    required: self.required_observations(),
                    actual: series.len(),
                })
            }
        };

        let output = self
            .provider
            .forecast(&series.values(), self.order, horizon)?;
        if output.values.len() != horizon {
            return Err(DashboardError::Forecast(format!(
                "provider '{}' returned {} values for a horizon of {}",
                self.provider.name(),
                output.values.len(),
                horizon
            )));
        }

        tracing::info!(
            country = %series.country,
            metric = %series.metric,
            observations = series.len(),
            horizon,
            "fitted {}",
            self.order
        );

        let points = output
            .values
            .into_iter()
            .zip(1..)
            .map(|(value, step)| SeriesPoint::new(last_year + step, value))
            .collect();

        Ok(ForecastResult {
            country: series.country.clone(),
            metric: series.metric,
            points,
            summary: output
                .summary
                .with_dep_variable(series.metric.field())
                .with_sample(first_year, last_year),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use electrify_spi::{Metric, ModelSummary, ProviderForecast};

    struct Flat;

    impl ForecastProvider for Flat {
        fn name(&self) -> &str {
            "flat"
        }

        fn forecast(&self, values: &[f64], order: ModelOrder, horizon: usize) -> Result<ProviderForecast> {
            let last = values.last().copied().unwrap_or_default();
            Ok(ProviderForecast {
                values: vec![last; horizon],
                summary: ModelSummary {
                    order,
                    dep_variable: String::new(),
                    nobs: values.len(),
                    sample: None,
                    params: Vec::new(),
                    log_likelihood: 0.0,
                    aic: 0.0,
                    bic: 0.0,
                },
            })
        }
    }

    fn series(years: std::ops::RangeInclusive<i32>) -> CountrySeries {
        CountrySeries {
            country: "Kenya".to_string(),
            metric: Metric::ElectricityAccess,
            points: years
                .map(|y| SeriesPoint::new(y, 50.0 + (y - 2000) as f64))
                .collect(),
        }
    }

    #[test]
    fn test_years_follow_last_observation() {
        let engine = ForecastEngine::new(Arc::new(Flat), ModelOrder::default(), 6);
        let result = engine.forecast(&series(2015..=2022), 5).unwrap();
        assert_eq!(result.years(), vec![2023, 2024, 2025, 2026, 2027]);
        assert_eq!(result.summary.dep_variable, "electricity_access");
        assert_eq!(result.summary.sample, Some((2015, 2022)));
    }

    #[test]
    fn test_short_series_rejected() {
        let engine = ForecastEngine::new(Arc::new(Flat), ModelOrder::default(), 6);
        let err = engine.forecast(&series(2019..=2022), 5).unwrap_err();
        assert_eq!(
            err,
            DashboardError::InsufficientData {
                required: 6,
                actual: 4
            }
        );
    }

    #[test]
    fn test_provider_minimum_raises_requirement() {
        let engine = ForecastEngine::new(Arc::new(ArimaProvider), ModelOrder::new(2, 1, 2), 6);
        assert_eq!(engine.required_observations(), 7);
        assert!(!engine.is_forecastable(&series(2017..=2022)));

        let err = engine.forecast(&series(2017..=2022), 5).unwrap_err();
        assert_eq!(
            err,
            DashboardError::InsufficientData {
                required: 7,
                actual: 6
            }
        );
    }

    #[test]
    fn test_configured_minimum_wins_when_larger() {
        let engine = ForecastEngine::new(Arc::new(ArimaProvider), ModelOrder::default(), 6);
        assert_eq!(engine.required_observations(), 6);

        let lenient = ForecastEngine::new(Arc::new(ArimaProvider), ModelOrder::default(), 3);
        assert_eq!(lenient.required_observations(), 5);
        assert!(!lenient.is_forecastable(&series(2019..=2022)));
    }

    #[test]
    fn test_arima_provider_end_to_end() {
        let engine = ForecastEngine::new(Arc::new(ArimaProvider), ModelOrder::default(), 6);
        let result = engine.forecast(&series(2010..=2021), 7).unwrap();
        assert_eq!(result.len(), 7);
        assert_eq!(result.years().first(), Some(&2022));
        assert!(result.values().iter().all(|v| v.is_finite()));
    }
}
