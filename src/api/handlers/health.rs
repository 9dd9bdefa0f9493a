/*
 * Responsibility
 * - GET /health (疎通用, 定数レスポンス)
 * - middleware を通す/通さない方針の確認用
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const fn healthy() -> Self {
        Self { status: "healthy" }
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::healthy()))
}
