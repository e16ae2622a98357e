pub mod member_handlers;
pub mod ng_pair_handlers;
pub mod pediatric_date_handlers;
pub mod shift_request_handlers;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check handler
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
