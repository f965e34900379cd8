use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use session_core::Member;
use session_store::{SessionStore, StoreStats};

use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub sessions: StoreStats,
}

/// Health check - GET /health
pub async fn health_check(
    State(sessions): State<Arc<SessionStore<Member>>>,
) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "ok",
        sessions: sessions.stats(),
    }))
}
