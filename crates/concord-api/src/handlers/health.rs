//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::response::ApiResult;
use crate::state::AppState;

/// Health response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Readiness response body
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
    pub cache: bool,
}

/// Liveness check
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness check: pings PostgreSQL and Redis
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> ApiResult<Json<ReadinessResponse>> {
    let database = concord_db::pool::ping(state.db_pool()).await;
    let cache = state.redis_pool().health_check().await.is_ok();

    Ok(Json(ReadinessResponse {
        status: if database && cache { "ready" } else { "degraded" },
        database,
        cache,
    }))
}
