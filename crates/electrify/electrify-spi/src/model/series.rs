//! Per-country time series.

use serde::Serialize;

use crate::model::Metric;

/// One observation or projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// A single country's metric, ordered by ascending year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySeries {
    pub country: String,
    pub metric: Metric,
    pub points: Vec<SeriesPoint>,
}

impl CountrySeries {
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

    pub fn first_year(&self) -> Option<i32> {
        self.points.first().map(|p| p.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.points.last().map(|p| p.year)
    }
}
