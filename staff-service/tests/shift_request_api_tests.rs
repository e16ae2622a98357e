#[path = "common/mod.rs"]
mod common;

use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::json;
use shared::ApiResponse;
use std::sync::Arc;
use uuid::Uuid;

use common::{create_mock_redis_pool, create_test_app_state, MockMemberRepository, MockNgPairRepository, MockPediatricDateRepository, MockShiftRequestRepository};
use staff_service::presentation::ShiftRequestSerializer;

async fn test_server() -> TestServer {
    let member_repo = Arc::new(MockMemberRepository::new());
    let ng_pair_repo = Arc::new(MockNgPairRepository::new());
    let shift_request_repo = Arc::new(MockShiftRequestRepository::new());
    let pediatric_date_repo = Arc::new(MockPediatricDateRepository::new());
    let redis_pool = create_mock_redis_pool().await;

    let app_state = create_test_app_state(
        member_repo,
        ng_pair_repo,
        shift_request_repo,
        pediatric_date_repo,
        redis_pool,
    );
    let app = staff_service::api::create_router(app_state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn create_shift_request_succeeds() {
    let server = test_server().await;
    let member_id = Uuid::new_v4();

    let response = server
        .post("/api/v1/shift-requests")
        .json(&json!({
            "member_id": member_id,
            "date": "2026-08-05",
            "request_type": "day_off"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: ApiResponse<ShiftRequestSerializer> = response.json();
    assert_eq!(body.data.member_id, member_id);
    assert_eq!(body.data.date, NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
}

#[tokio::test]
async fn create_shift_request_conflicts_on_duplicate() {
    let server = test_server().await;
    let member_id = Uuid::new_v4();
    let payload = json!({
        "member_id": member_id,
        "date": "2026-08-05",
        "request_type": "day_off"
    });

    let first = server.post("/api/v1/shift-requests").json(&payload).await;
    first.assert_status(axum::http::StatusCode::CREATED);

    let second = server.post("/api/v1/shift-requests").json(&payload).await;
    second.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn list_shift_requests_filters_by_year_month() {
    let server = test_server().await;
    let member_id = Uuid::new_v4();

    server
        .post("/api/v1/shift-requests")
        .json(&json!({ "member_id": member_id, "date": "2026-08-05", "request_type": "day_off" }))
        .await;
    server
        .post("/api/v1/shift-requests")
        .json(&json!({ "member_id": member_id, "date": "2026-09-01", "request_type": "paid_leave" }))
        .await;

    let response = server.get("/api/v1/shift-requests?year_month=2026-08").await;
    response.assert_status_ok();
    let body: ApiResponse<Vec<ShiftRequestSerializer>> = response.json();
    assert_eq!(body.data.len(), 1);
    assert_eq!(body.data[0].date, NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
}

#[tokio::test]
async fn update_shift_request_changes_type() {
    let server = test_server().await;
    let member_id = Uuid::new_v4();

    let create_response = server
        .post("/api/v1/shift-requests")
        .json(&json!({ "member_id": member_id, "date": "2026-08-05", "request_type": "day_off" }))
        .await;
    let created: ApiResponse<ShiftRequestSerializer> = create_response.json();

    let response = server
        .put(&format!("/api/v1/shift-requests/{}", created.data.id))
        .json(&json!({ "request_type": "paid_leave" }))
        .await;

    response.assert_status_ok();
    let body: ApiResponse<ShiftRequestSerializer> = response.json();
    assert!(matches!(body.data.request_type, shared::RequestType::PaidLeave));
}

#[tokio::test]
async fn update_shift_request_returns_not_found() {
    let server = test_server().await;
    let response = server
        .put(&format!("/api/v1/shift-requests/{}", Uuid::new_v4()))
        .json(&json!({ "request_type": "paid_leave" }))
        .await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn delete_shift_request_removes_it() {
    let server = test_server().await;
    let member_id = Uuid::new_v4();

    let create_response = server
        .post("/api/v1/shift-requests")
        .json(&json!({ "member_id": member_id, "date": "2026-08-05", "request_type": "day_off" }))
        .await;
    let created: ApiResponse<ShiftRequestSerializer> = create_response.json();

    let response = server
        .delete(&format!("/api/v1/shift-requests/{}", created.data.id))
        .await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_shift_request_returns_not_found() {
    let server = test_server().await;
    let response = server
        .delete(&format!("/api/v1/shift-requests/{}", Uuid::new_v4()))
        .await;
    response.assert_status_not_found();
}
