//! Selection controls and the user's current choice.

use serde::{Deserialize, Serialize};

use crate::model::{HorizonBounds, Metric};

/// Choices offered to the user for a loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    /// Distinct country values, sorted
    pub countries: Vec<String>,
    pub metrics: Vec<Metric>,
    pub horizon: HorizonBounds,
}

/// A resolved, valid selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub country: String,
    pub metric: Metric,
    /// Forecast horizon in years
    pub horizon: usize,
}

/// Raw user input; unset fields fall back to the control defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub country: Option<String>,
    pub metric: Option<Metric>,
    pub horizon: Option<usize>,
}

impl SelectionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn metric(mut self, metric: Metric) -> Self {
        self.metric = Some(metric);
        self
    }

    pub fn horizon(mut self, horizon: usize) -> Self {
        self.horizon = Some(horizon);
        self
    }
}
