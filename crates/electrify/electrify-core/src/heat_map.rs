//! Cross-country heat map view.

use std::collections::{BTreeMap, BTreeSet};

use electrify_spi::{Dataset, HeatMap, Metric, Result};

use crate::table::{self, COUNTRY, YEAR};

/// Pivot the whole dataset into a country x year grid of `metric`.
///
/// Duplicate (country, year) rows are averaged. Missing values never
/// create a row or column on their own; absent cells stay `None`.
pub fn pivot(dataset: &Dataset, metric: Metric) -> Result<HeatMap> {
    let country_col = dataset.column_index(COUNTRY)?;
    let year_col = dataset.column_index(YEAR)?;
    let metric_col = dataset.column_index(metric.field())?;

    let mut sums: BTreeMap<String, BTreeMap<i32, (f64, usize)>> = BTreeMap::new();
    let mut years = BTreeSet::new();

    for row in 0..dataset.len() {
        let country = dataset.cell(row, country_col);
        if country.is_empty() {
            continue;
        }
        let year = table::parse_year(dataset, row, year_col)?;
        let Some(value) = table::parse_value(dataset, row, metric_col, metric.field())? else {
            continue;
        };
        let cell = sums
            .entry(country.to_string())
            .or_default()
            .entry(year)
            .or_insert((0.0, 0));
        cell.0 += value;
        cell.1 += 1;
        years.insert(year);
    }

    let years: Vec<i32> = years.into_iter().collect();
    let mut countries = Vec::with_capacity(sums.len());
    let mut cells = Vec::with_capacity(sums.len());
    for (country, by_year) in sums {
        let row = years
            .iter()
            .map(|y| by_year.get(y).map(|(sum, n)| sum / *n as f64))
            .collect();
        countries.push(country);
        cells.push(row);
    }

    tracing::debug!(
        metric = %metric,
        countries = countries.len(),
        years = years.len(),
        "pivoted heat map"
    );

    Ok(HeatMap {
        metric,
        countries,
        years,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_csv_bytes;

    const CSV: &str = "\
country,year,electricity_access
Kenya,2020,70
Ghana,2021,85
Kenya,2021,72
Kenya,2021,74
Chad,2020,
";

    #[test]
    fn test_grid_shape_and_empty_cells() {
        let ds = load_csv_bytes(CSV.as_bytes()).unwrap();
        let map = pivot(&ds, Metric::ElectricityAccess).unwrap();
        assert_eq!(map.countries, vec!["Ghana", "Kenya"]);
        assert_eq!(map.years, vec![2020, 2021]);
        assert_eq!(map.get("Ghana", 2020), None);
        assert_eq!(map.get("Kenya", 2020), Some(70.0));
    }

    #[test]
    fn test_duplicates_averaged() {
        let ds = load_csv_bytes(CSV.as_bytes()).unwrap();
        let map = pivot(&ds, Metric::ElectricityAccess).unwrap();
        assert_eq!(map.get("Kenya", 2021), Some(73.0));
    }

    #[test]
    fn test_missing_metric_column() {
        let ds = load_csv_bytes(CSV.as_bytes()).unwrap();
        assert!(pivot(&ds, Metric::RuralAccess).is_err());
    }
}
