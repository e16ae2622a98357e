#[path = "common/mod.rs"]
mod common;

use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::json;
use shared::ApiResponse;
use std::sync::Arc;
use uuid::Uuid;

use common::{create_mock_redis_pool, create_test_app_state, MockMemberRepository, MockNgPairRepository, MockPediatricDateRepository, MockShiftRequestRepository};
use staff_service::presentation::PediatricDateSerializer;

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
async fn create_pediatric_date_succeeds() {
    let server = test_server().await;

    let response = server
        .post("/api/v1/pediatric-dates")
        .json(&json!({ "date": "2026-08-12" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: ApiResponse<PediatricDateSerializer> = response.json();
    assert_eq!(body.data.date, NaiveDate::from_ymd_opt(2026, 8, 12).unwrap());
}

#[tokio::test]
async fn list_pediatric_dates_filters_by_year_month() {
    let server = test_server().await;

    server
        .post("/api/v1/pediatric-dates")
        .json(&json!({ "date": "2026-08-12" }))
        .await;
    server
        .post("/api/v1/pediatric-dates")
        .json(&json!({ "date": "2026-09-01" }))
        .await;

    let response = server.get("/api/v1/pediatric-dates?year_month=2026-08").await;
    response.assert_status_ok();
    let body: ApiResponse<Vec<PediatricDateSerializer>> = response.json();
    assert_eq!(body.data.len(), 1);
}

#[tokio::test]
async fn delete_pediatric_date_removes_it() {
    let server = test_server().await;

    let create_response = server
        .post("/api/v1/pediatric-dates")
        .json(&json!({ "date": "2026-08-12" }))
        .await;
    let created: ApiResponse<PediatricDateSerializer> = create_response.json();

    let response = server
        .delete(&format!("/api/v1/pediatric-dates/{}", created.data.id))
        .await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_pediatric_date_returns_not_found() {
    let server = test_server().await;
    let response = server
        .delete(&format!("/api/v1/pediatric-dates/{}", Uuid::new_v4()))
        .await;
    response.assert_status_not_found();
}
