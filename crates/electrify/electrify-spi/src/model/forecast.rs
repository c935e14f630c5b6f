//! Forecast outputs.

use std::fmt;

use serde::Serialize;

use crate::model::{Metric, ModelOrder, SeriesPoint};

const RULE_WIDTH: usize = 78;

/// Fitted-model diagnostics rendered as a plain-text table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub order: ModelOrder,
    /// Name of the modelled column
    pub dep_variable: String,
    /// Observations used in the fit
    pub nobs: usize,
    /// First and last observed year
    pub sample: Option<(i32, i32)>,
    /// Estimated parameters in display order
    pub params: Vec<(String, f64)>,
    pub log_likelihood: f64,
    pub aic: f64,
    pub bic: f64,
}

impl ModelSummary {
    pub fn with_dep_variable(mut self, name: impl Into<String>) -> Self {
        self.dep_variable = name.into();
        self
    }

    pub fn with_sample(mut self, first: i32, last: i32) -> Self {
        self.sample = Some((first, last));
        self
    }

    pub fn param(&self, name: &str) -> Option<f64> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let dep = if self.dep_variable.is_empty() {
            "y"
        } else {
            &self.dep_variable
        };
        let sample = match self.sample {
            Some((first, last)) => format!("{} - {}", first, last),
            None => "--".to_string(),
        };

        writeln!(f, "{:^width$}", "ARIMA Results", width = RULE_WIDTH)?;
        writeln!(f, "{}", heavy)?;
        writeln!(
            f,
            "{:<19}{:<20}{:<22}{:>17}",
            "Dep. Variable:", dep, "No. Observations:", self.nobs
        )?;
        writeln!(
            f,
            "{:<19}{:<20}{:<22}{:>17.3}",
            "Model:",
            self.order.to_string(),
            "Log Likelihood:",
            self.log_likelihood
        )?;
        writeln!(
            f,
            "{:<19}{:<20}{:<22}{:>17.3}",
            "Sample:", sample, "AIC:", self.aic
        )?;
        writeln!(f, "{:<39}{:<22}{:>17.3}", "", "BIC:", self.bic)?;
        writeln!(f, "{}", heavy)?;
        writeln!(f, "{:<19}{:>12}", "", "coef")?;
        writeln!(f, "{}", light)?;
        for (name, value) in &self.params {
            writeln!(f, "{:<19}{:>12.4}", name, value)?;
        }
        write!(f, "{}", heavy)
    }
}

/// Raw output of a [`crate::ForecastProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderForecast {
    pub values: Vec<f64>,
    pub summary: ModelSummary,
}

/// Projected values for the years immediately after the last observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    pub country: String,
    pub metric: Metric,
    pub points: Vec<SeriesPoint>,
    pub summary: ModelSummary,
}

impl ForecastResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn years(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.year).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// The value at the end of the horizon.
    pub fn final_value(&self) -> Option<f64> {
        self.points.last().map(|p| p.value)
    }
}
