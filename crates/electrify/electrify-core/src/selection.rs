//! Selection controls derived from a loaded dataset.

use electrify_spi::{
    Controls, DashboardConfig, DashboardError, Dataset, Metric, Result, Selection,
    SelectionRequest,
};

use crate::table;

/// Choices offered for `dataset`.
pub fn controls(dataset: &Dataset, config: &DashboardConfig) -> Result<Controls> {
    Ok(Controls {
        countries: table::countries(dataset)?,
        metrics: Metric::all().to_vec(),
        horizon: config.horizon,
    })
}

/// Resolve a request against the offered choices.
///
/// Unset fields take the widget defaults: the first country, the first
/// metric and the default horizon. Whether the metric column exists is not
/// checked here.
pub fn resolve(controls: &Controls, request: &SelectionRequest) -> Result<Selection> {
    let country = match &request.country {
        Some(country) => {
            if !controls.countries.iter().any(|c| c == country) {
                return Err(DashboardError::InvalidSelection(format!(
                    "unknown country '{}'",
                    country
                )));
            }
            country.clone()
        }
        None => controls.countries.first().cloned().ok_or_else(|| {
            DashboardError::InvalidSelection("dataset has no countries".to_string())
        })?,
    };

    let horizon = request.horizon.unwrap_or(controls.horizon.default);
    if !controls.horizon.contains(horizon) {
        return Err(DashboardError::InvalidSelection(format!(
            "horizon {} outside {}..={}",
            horizon, controls.horizon.min, controls.horizon.max
        )));
    }

    Ok(Selection {
        country,
        metric: request.metric.unwrap_or_default(),
        horizon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_csv_bytes;

    fn sample_controls() -> Controls {
        let ds = load_csv_bytes(b"country,year\nZambia,2020\nBenin,2020\nZambia,2021\n").unwrap();
        controls(&ds, &DashboardConfig::default()).unwrap()
    }

    #[test]
    fn test_controls_offer_sorted_countries() {
        let c = sample_controls();
        assert_eq!(c.countries, vec!["Benin", "Zambia"]);
        assert_eq!(c.metrics.len(), 3);
        assert_eq!((c.horizon.min, c.horizon.max), (3, 15));
    }

    #[test]
    fn test_defaults() {
        let selection = resolve(&sample_controls(), &SelectionRequest::new()).unwrap();
        assert_eq!(selection.country, "Benin");
        assert_eq!(selection.metric, Metric::ElectricityAccess);
        assert_eq!(selection.horizon, 5);
    }

    #[test]
    fn test_unknown_country_rejected() {
        let request = SelectionRequest::new().country("Atlantis");
        assert!(matches!(
            resolve(&sample_controls(), &request),
            Err(DashboardError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_horizon_bounds() {
        let c = sample_controls();
        assert!(resolve(&c, &SelectionRequest::new().horizon(3)).is_ok());
        assert!(resolve(&c, &SelectionRequest::new().horizon(15)).is_ok());
        assert!(resolve(&c, &SelectionRequest::new().horizon(2)).is_err());
        assert!(resolve(&c, &SelectionRequest::new().horizon(16)).is_err());
    }

    #[test]
    fn test_missing_country_column() {
        let ds = load_csv_bytes(b"nation,year\nChad,2020\n").unwrap();
        let err = controls(&ds, &DashboardConfig::default()).unwrap_err();
        assert_eq!(err, DashboardError::MissingColumn("country".to_string()));
    }
}
