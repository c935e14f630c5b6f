//! Dashboard policy configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// ARIMA order `(p, d, q)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOrder {
    /// AR order
    pub p: usize,
    /// Differencing order
    pub d: usize,
    /// MA order
    pub q: usize,
}

impl ModelOrder {
    pub const fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    pub fn validate(&self) -> Result<()> {
        if self.p > 10 {
            return Err(DashboardError::InvalidParameter {
                name: "p".to_string(),
                reason: "AR order must be <= 10".to_string(),
            });
        }
        if self.d > 2 {
            return Err(DashboardError::InvalidParameter {
                name: "d".to_string(),
                reason: "Differencing order must be <= 2".to_string(),
            });
        }
        if self.q > 10 {
            return Err(DashboardError::InvalidParameter {
                name: "q".to_string(),
                reason: "MA order must be <= 10".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ModelOrder {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

impl fmt::Display for ModelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARIMA({}, {}, {})", self.p, self.d, self.q)
    }
}

/// Bounds and default of the forecast-horizon slider, in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizonBounds {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

impl HorizonBounds {
    pub fn contains(&self, horizon: usize) -> bool {
        (self.min..=self.max).contains(&horizon)
    }

    pub fn clamp(&self, horizon: usize) -> usize {
        horizon.clamp(self.min, self.max)
    }
}

impl Default for HorizonBounds {
    fn default() -> Self {
        Self {
            min: 3,
            max: 15,
            default: 5,
        }
    }
}

/// Hardcoded policy choices of the dashboard, exposed as configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Model order handed to the forecast provider
    pub order: ModelOrder,
    /// Universal-access threshold in percent
    pub threshold: f64,
    /// Minimum observed years before a forecast is attempted
    pub min_observations: usize,
    /// Forecast horizon slider
    pub horizon: HorizonBounds,
    /// Number of parsed uploads kept in memory
    pub cache_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            order: ModelOrder::default(),
            threshold: 90.0,
            min_observations: 6,
            horizon: HorizonBounds::default(),
            cache_capacity: 16,
        }
    }
}

impl DashboardConfig {
    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        self.order.validate()?;
        if !self.threshold.is_finite() {
            return Err(DashboardError::Config("threshold must be finite".to_string()));
        }
        let h = &self.horizon;
        if h.min == 0 || h.min > h.max || !h.contains(h.default) {
            return Err(DashboardError::Config(format!(
                "horizon bounds must satisfy 1 <= min <= default <= max (got {}..={}, default {})",
                h.min, h.max, h.default
            )));
        }
        if self.min_observations == 0 {
            return Err(DashboardError::Config(
                "min_observations must be at least 1".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(DashboardError::Config(
                "cache_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
