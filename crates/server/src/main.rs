//! # electrify-server
//!
//! REST API for the electrification dashboard. Clients post the CSV as the
//! request body and get the rendered dashboard back as JSON.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use electrify_facade::{
    load_config_or_default, CountrySeries, Dashboard, DashboardBuilder, Metric, SeriesPoint,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}

/// Liveness check - is the server running?
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness check - can the forecast provider produce a projection?
async fn readiness(State(state): State<AppState>) -> Json<serde_json::Value> {
    let engine = state.dashboard.engine();
    let sample = CountrySeries {
        country: "self-check".to_string(),
        metric: Metric::ElectricityAccess,
        points: (0..engine.required_observations().max(8))
            .map(|i| SeriesPoint::new(2000 + i as i32, 50.0 + i as f64))
            .collect(),
    };

    let check = match engine.forecast(&sample, 3) {
        Ok(_) => serde_json::json!({ "name": engine.provider_name(), "status": "healthy" }),
        Err(e) => {
            tracing::warn!(error = %e, "forecast self-check failed");
            serde_json::json!({
                "name": engine.provider_name(),
                "status": "unhealthy",
                "message": e.to_string()
            })
        }
    };
    let ready = check["status"] == "healthy";

    Json(serde_json::json!({
        "status": if ready { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "cached_uploads": state.dashboard.cache().len(),
        "checks": [check]
    }))
}

/// Routes and middleware, without binding a socket.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        .route("/health", get(liveness))
        // API endpoints
        .route("/api/v1/metrics", get(routes::metrics))
        .route("/api/v1/controls", post(routes::controls))
        .route("/api/v1/dashboard", post(routes::dashboard))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "electrify_server=info,electrify_core=info,tower_http=info".into()
            }),
        )
        .init();

    let config_path = env::var("ELECTRIFY_CONFIG").ok().map(PathBuf::from);
    let config = load_config_or_default(config_path.as_deref())?;
    let dashboard = DashboardBuilder::new().config(config).build()?;
    let app = build_router(AppState::new(dashboard));

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .context("PORT must be a valid number")?;
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("Invalid HOST:PORT configuration")?;

    tracing::info!("electrify-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
