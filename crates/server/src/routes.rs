//! API route handlers

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use electrify_facade::{
    content, Controls, DashboardReport, HorizonBounds, Metric, SelectionRequest, Upload,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

/// Name given to request bodies in logs and the parse cache.
const BODY_UPLOAD_NAME: &str = "request-body.csv";

#[derive(Debug, Serialize)]
pub struct MetricInfo {
    pub field: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub metrics: Vec<MetricInfo>,
    pub horizon: HorizonBounds,
    pub threshold: f64,
}

/// Metric choices and dashboard policy; needs no upload.
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let config = state.dashboard.config();
    Json(MetricsResponse {
        metrics: Metric::all()
            .iter()
            .map(|m| MetricInfo {
                field: m.field(),
                label: m.label(),
            })
            .collect(),
        horizon: config.horizon,
        threshold: config.threshold,
    })
}

/// Selection controls for the posted CSV.
pub async fn controls(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Controls>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BadRequest(content::UPLOAD_PROMPT.to_string()));
    }
    let upload = Upload::new(BODY_UPLOAD_NAME, body.to_vec());
    let dashboard = state.dashboard.clone();

    let controls = tokio::task::spawn_blocking(move || dashboard.controls(&upload))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;
    Ok(Json(controls))
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub country: Option<String>,
    pub metric: Option<String>,
    pub horizon: Option<usize>,
}

impl DashboardParams {
    fn into_request(self) -> Result<SelectionRequest, ApiError> {
        let mut request = SelectionRequest::new();
        if let Some(country) = self.country {
            request = request.country(country);
        }
        if let Some(metric) = self.metric {
            request = request.metric(metric.parse::<Metric>()?);
        }
        if let Some(horizon) = self.horizon {
            request = request.horizon(horizon);
        }
        Ok(request)
    }
}

/// Render the dashboard for the posted CSV.
///
/// An empty body yields a report halted with the upload prompt rather than
/// an error.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
    body: Bytes,
) -> Result<Json<DashboardReport>, ApiError> {
    let request = params.into_request()?;
    let upload = (!body.is_empty()).then(|| Upload::new(BODY_UPLOAD_NAME, body.to_vec()));
    let dashboard = state.dashboard.clone();

    let report = tokio::task::spawn_blocking(move || dashboard.render(upload.as_ref(), &request))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    tracing::info!(
        sections = report.sections.len(),
        halted = report.is_halted(),
        "rendered dashboard"
    );
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use electrify_facade::{Dashboard, DashboardConfig, Halt};

    const CSV: &str = "\
Country,Year,Electricity_Access,Rural_Access,Urban_Access
Rwanda,2015,22.8,9.0,71.0
Rwanda,2016,29.4,14.0,74.0
Rwanda,2017,34.1,19.0,77.0
Rwanda,2018,34.7,21.0,79.0
Rwanda,2019,37.8,25.0,82.0
Rwanda,2020,46.6,33.0,86.0
Rwanda,2021,48.7,36.0,88.0
Angola,2020,46.9,7.0,74.0
";

    fn state() -> AppState {
        AppState::new(Dashboard::new(DashboardConfig::default()).unwrap())
    }

    fn params(country: Option<&str>, metric: Option<&str>, horizon: Option<usize>) -> Query<DashboardParams> {
        Query(DashboardParams {
            country: country.map(String::from),
            metric: metric.map(String::from),
            horizon,
        })
    }

    #[tokio::test]
    async fn test_metrics_lists_fields() {
        let Json(body) = metrics(State(state())).await;
        let fields: Vec<_> = body.metrics.iter().map(|m| m.field).collect();
        assert_eq!(fields, vec!["electricity_access", "rural_access", "urban_access"]);
        assert_eq!(body.horizon.min, 3);
        assert_eq!(body.horizon.max, 15);
        assert_eq!(body.threshold, 90.0);
    }

    #[tokio::test]
    async fn test_controls_sorted_countries() {
        let Json(body) = controls(State(state()), Bytes::from(CSV)).await.unwrap();
        assert_eq!(body.countries, vec!["Angola", "Rwanda"]);
    }

    #[tokio::test]
    async fn test_controls_requires_body() {
        let err = controls(State(state()), Bytes::new()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dashboard_full_report() {
        let Json(report) = dashboard(
            State(state()),
            params(Some("Rwanda"), Some("electricity_access"), Some(4)),
            Bytes::from(CSV),
        )
        .await
        .unwrap();

        assert!(report.halt.is_none());
        assert_eq!(
            report.forecast().unwrap().forecast.years(),
            vec![2022, 2023, 2024, 2025]
        );
        assert!(report.recommendation().is_some());
    }

    #[tokio::test]
    async fn test_dashboard_defaults_to_first_country() {
        let Json(report) = dashboard(State(state()), params(None, None, None), Bytes::from(CSV))
            .await
            .unwrap();
        assert_eq!(report.trend().unwrap().series.country, "Angola");
        assert_eq!(
            report.halt,
            Some(Halt::Error(content::NOT_ENOUGH_DATA.to_string()))
        );
    }

    #[tokio::test]
    async fn test_dashboard_empty_body_halts() {
        let Json(report) = dashboard(State(state()), params(None, None, None), Bytes::new())
            .await
            .unwrap();
        assert_eq!(
            report.halt,
            Some(Halt::Warning(content::UPLOAD_PROMPT.to_string()))
        );
        assert_eq!(report.kinds(), vec!["title"]);
    }

    #[tokio::test]
    async fn test_dashboard_rejects_bad_input() {
        let bad_metric = dashboard(State(state()), params(None, Some("gdp"), None), Bytes::from(CSV))
            .await
            .unwrap_err();
        assert_eq!(bad_metric.status(), StatusCode::BAD_REQUEST);

        let bad_horizon = dashboard(State(state()), params(None, None, Some(40)), Bytes::from(CSV))
            .await
            .unwrap_err();
        assert_eq!(bad_horizon.status(), StatusCode::BAD_REQUEST);

        let no_year = dashboard(
            State(state()),
            params(None, None, None),
            Bytes::from("country,electricity_access\nPeru,90\n"),
        )
        .await
        .unwrap_err();
        assert_eq!(no_year.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
