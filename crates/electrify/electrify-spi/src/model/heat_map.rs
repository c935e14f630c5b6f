//! Country x year grid of one metric.

use serde::Serialize;

use crate::model::Metric;

/// Pivoted view of the whole dataset.
///
/// `cells[i][j]` is the value for `countries[i]` in `years[j]`, or `None`
/// where the dataset has no observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatMap {
    pub metric: Metric,
    pub countries: Vec<String>,
    pub years: Vec<i32>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl HeatMap {
    pub fn get(&self, country: &str, year: i32) -> Option<f64> {
        let row = self.countries.iter().position(|c| c == country)?;
        let col = self.years.iter().position(|&y| y == year)?;
        self.cells[row][col]
    }

    /// Minimum and maximum over all filled cells.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() || self.years.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_range() {
        let map = HeatMap {
            metric: Metric::ElectricityAccess,
            countries: vec!["Ghana".to_string(), "Kenya".to_string()],
            years: vec![2020, 2021],
            cells: vec![vec![Some(80.0), None], vec![Some(60.0), Some(70.0)]],
        };
        assert_eq!(map.get("Kenya", 2021), Some(70.0));
        assert_eq!(map.get("Ghana", 2021), None);
        assert_eq!(map.get("Chad", 2020), None);
        assert_eq!(map.value_range(), Some((60.0, 80.0)));
    }
}
