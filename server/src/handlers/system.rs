use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header,
    response::IntoResponse,
    Json,
};
use trip_planner_lib::{
    endpoints::{DOCS_PATH, HEALTH_PATH, METRICS_PATH},
    service::{HealthStatus, ServiceInfo},
};

use crate::{error::ApiError, middleware::RequestId, server_state::ServerState};

pub const SERVICE_NAME: &str = "Trip Planner API";

pub async fn root(State(state): State<Arc<ServerState>>) -> Json<ServiceInfo> {
    let documentation = if state.config.docs { DOCS_PATH } else { "disabled" };
    let metrics = if state.config.metrics { METRICS_PATH } else { "disabled" };

    Json(ServiceInfo {
        message: format!("Welcome to {SERVICE_NAME}"),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        documentation: documentation.to_string(),
        health: HEALTH_PATH.to_string(),
        metrics: metrics.to_string(),
    })
}

pub async fn health(State(state): State<Arc<ServerState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        timestamp: chrono::Utc::now(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

pub async fn metrics(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    tracing::debug!("Metrics endpoint accessed");
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub async fn not_found(req: Request) -> ApiError {
    ApiError::NotFound {
        path: req.uri().path().to_string(),
        request_id: req.extensions().get::<RequestId>().map(|RequestId(id)| id.clone()),
    }
}
