//! Health check handler

use axum::extract::State;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ApiResult, ok};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthData {
    #[schema(example = "ok")]
    pub status: &'static str,
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    /// Products currently in the catalog
    pub products: i64,
    /// Database probe round trip in milliseconds
    pub db_latency_ms: u64,
}

/// Service health, probing the catalog schema with a real query
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = ApiResponse<HealthData>),
        (status = 500, description = "Database unreachable or schema missing")
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> ApiResult<HealthData> {
    let ready = state
        .db
        .readiness()
        .await
        .map_err(|e| ApiError::internal(format!("Catalog store not ready: {}", e)))?;

    ok(HealthData {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        products: ready.products,
        db_latency_ms: ready.latency_ms,
    })
}
