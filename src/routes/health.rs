use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::AppState;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
}

/// Health check endpoint
///
/// Returns 200 OK if the service is running.
/// Does not touch the database; suitable for liveness probes.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "health"
)]
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness check endpoint
///
/// Returns 200 once the dataset answers a ping, 503 otherwise.
#[utoipa::path(
    get,
    path = "/readyz",
    responses(
        (status = 200, description = "Dataset reachable", body = ReadinessResponse),
        (status = 503, description = "Dataset unreachable"),
    ),
    tag = "health"
)]
pub async fn readyz(State(state): State<AppState>) -> AppResult<Json<ReadinessResponse>> {
    state.db.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Database ping failed");
        AppError::ServiceUnavailable("Database unavailable".to_string())
    })?;

    Ok(Json(ReadinessResponse {
        status: "ready".to_string(),
    }))
}
