//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use electrify_facade::DashboardError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure of an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    #[error("{0}")]
    BadRequest(String),

    #[error("worker failed: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Dashboard(err) => match err {
                DashboardError::InvalidSelection(_) | DashboardError::InvalidParameter { .. } => {
                    StatusCode::BAD_REQUEST
                }
                DashboardError::MissingColumn(_)
                | DashboardError::InvalidValue { .. }
                | DashboardError::Csv(_)
                | DashboardError::InsufficientData { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                DashboardError::Forecast(_) | DashboardError::Io(_) | DashboardError::Config(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let missing = ApiError::from(DashboardError::MissingColumn("year".to_string()));
        assert_eq!(missing.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let selection = ApiError::from(DashboardError::InvalidSelection("Mars".to_string()));
        assert_eq!(selection.status(), StatusCode::BAD_REQUEST);

        let forecast = ApiError::from(DashboardError::Forecast("diverged".to_string()));
        assert_eq!(forecast.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_message_passes_through() {
        let err = ApiError::from(DashboardError::MissingColumn("year".to_string()));
        assert_eq!(err.to_string(), DashboardError::MissingColumn("year".to_string()).to_string());
    }
}
