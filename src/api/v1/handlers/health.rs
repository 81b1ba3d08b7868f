/*
 * Responsibility
 * - GET /health (疎通用)
 * - guard chain の外 (/api/v1 の外) に置く
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
