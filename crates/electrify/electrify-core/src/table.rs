//! Typed access to the raw dataset cells.

use std::collections::BTreeSet;

use electrify_spi::{CountrySeries, DashboardError, Dataset, Metric, Result, SeriesPoint};

pub const COUNTRY: &str = "country";
pub const YEAR: &str = "year";

/// Cell spellings read as a missing value.
const MISSING: &[&str] = &["", "na", "n/a", "nan", "-nan", "null", "none", "#n/a"];

fn invalid(column: &str, row: usize, value: &str) -> DashboardError {
    DashboardError::InvalidValue {
        column: column.to_string(),
        row: row + 1,
        value: value.to_string(),
    }
}

/// Parse the year cell of `row`. Whole floats such as `2015.0` are accepted.
pub fn parse_year(dataset: &Dataset, row: usize, col: usize) -> Result<i32> {
    let raw = dataset.cell(row, col).trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Ok(year);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 && v.abs() <= i32::MAX as f64 => Ok(v as i32),
        _ => Err(invalid(YEAR, row, raw)),
    }
}

/// Parse a numeric cell; missing markers yield `None`.
pub fn parse_value(dataset: &Dataset, row: usize, col: usize, column: &str) -> Result<Option<f64>> {
    let raw = dataset.cell(row, col).trim();
    if MISSING.contains(&raw.to_lowercase().as_str()) {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| invalid(column, row, raw))
}

/// Distinct country values, sorted. Blank cells are ignored.
pub fn countries(dataset: &Dataset) -> Result<Vec<String>> {
    let col = dataset.column_index(COUNTRY)?;
    let distinct: BTreeSet<&str> = (0..dataset.len())
        .map(|row| dataset.cell(row, col))
        .filter(|c| !c.is_empty())
        .collect();
    Ok(distinct.into_iter().map(String::from).collect())
}

/// Rows of `country` for `metric`, sorted by ascending year.
///
/// Rows with a missing metric value are skipped. The sort is stable, so
/// duplicate years keep their file order.
pub fn country_series(dataset: &Dataset, country: &str, metric: Metric) -> Result<CountrySeries> {
    let country_col = dataset.column_index(COUNTRY)?;
    let year_col = dataset.column_index(YEAR)?;
    let metric_col = dataset.column_index(metric.field())?;

    let mut points = Vec::new();
    for row in 0..dataset.len() {
        if dataset.cell(row, country_col) != country {
            continue;
        }
        let year = parse_year(dataset, row, year_col)?;
        if let Some(value) = parse_value(dataset, row, metric_col, metric.field())? {
            points.push(SeriesPoint::new(year, value));
        }
    }
    points.sort_by_key(|p| p.year);

    Ok(CountrySeries {
        country: country.to_string(),
        metric,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_csv_bytes;

    const CSV: &str = "\
country,year,electricity_access,rural_access
Kenya,2017,63.8,55.0
Ghana,2016,79.3,
Kenya,2015,56.0,48.1
Kenya,2016,NA,51.2
Ghana,2015,78.0,60.1
";

    #[test]
    fn test_countries_sorted_distinct() {
        let ds = load_csv_bytes(CSV.as_bytes()).unwrap();
        assert_eq!(countries(&ds).unwrap(), vec!["Ghana", "Kenya"]);
    }

    #[test]
    fn test_padded_country_names_merge() {
        let ds = load_csv_bytes(b"country,year,electricity_access\nKenya ,2020,70\n Kenya,2021,72\nKenya,2022,75\n")
            .unwrap();
        assert_eq!(countries(&ds).unwrap(), vec!["Kenya"]);
        let series = country_series(&ds, "Kenya", Metric::ElectricityAccess).unwrap();
        assert_eq!(series.years(), vec![2020, 2021, 2022]);
    }

    #[test]
    fn test_series_sorted_by_year() {
        let ds = load_csv_bytes(CSV.as_bytes()).unwrap();
        let series = country_series(&ds, "Kenya", Metric::RuralAccess).unwrap();
        assert_eq!(series.years(), vec![2015, 2016, 2017]);
        assert_eq!(series.values(), vec![48.1, 51.2, 55.0]);
    }

    #[test]
    fn test_missing_values_skipped() {
        let ds = load_csv_bytes(CSV.as_bytes()).unwrap();
        let series = country_series(&ds, "Kenya", Metric::ElectricityAccess).unwrap();
        assert_eq!(series.years(), vec![2015, 2017]);
    }

    #[test]
    fn test_missing_metric_column() {
        let ds = load_csv_bytes(CSV.as_bytes()).unwrap();
        let err = country_series(&ds, "Kenya", Metric::UrbanAccess).unwrap_err();
        assert_eq!(err, DashboardError::MissingColumn("urban_access".to_string()));
    }

    #[test]
    fn test_non_numeric_value_fails() {
        let ds = load_csv_bytes(b"country,year,rural_access\nChad,2020,high\n").unwrap();
        let err = country_series(&ds, "Chad", Metric::RuralAccess).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidValue { row: 1, .. }));
    }

    #[test]
    fn test_float_years_accepted() {
        let ds = load_csv_bytes(b"country,year\nChad,2020.0\nChad,20.5\n").unwrap();
        assert_eq!(parse_year(&ds, 0, 1).unwrap(), 2020);
        assert!(parse_year(&ds, 1, 1).is_err());
    }
}
