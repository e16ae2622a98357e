#[path = "common/mod.rs"]
mod common;

use axum_test::TestServer;
use serde_json::json;
use shared::ApiResponse;
use std::sync::Arc;
use uuid::Uuid;

use common::{create_mock_redis_pool, create_sample_member, create_test_app_state, MockMemberRepository, MockNgPairRepository, MockPediatricDateRepository, MockShiftRequestRepository};
use staff_service::presentation::MemberSerializer;

async fn test_server_with_members(members: Vec<staff_service::domain::entities::Member>) -> TestServer {
    let member_repo = Arc::new(MockMemberRepository::with_members(members));
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
async fn health_check_returns_healthy() {
    let server = test_server_with_members(vec![]).await;
    let response = server.get("/api/v1/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn create_member_succeeds_with_valid_bounds() {
    let server = test_server_with_members(vec![]).await;

    let response = server
        .post("/api/v1/members")
        .json(&json!({
            "name": "Alice Nguyen",
            "qualification": "nurse",
            "employment_type": "full_time",
            "max_night_shifts": 5,
            "min_night_shifts": 1,
            "capabilities": ["day_shift", "night_shift"]
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: ApiResponse<MemberSerializer> = response.json();
    assert_eq!(body.data.name, "Alice Nguyen");
    assert_eq!(body.data.max_night_shifts, 5);
}

#[tokio::test]
async fn create_member_rejects_min_above_max() {
    let server = test_server_with_members(vec![]).await;

    let response = server
        .post("/api/v1/members")
        .json(&json!({
            "name": "Bad Bounds",
            "qualification": "nurse",
            "employment_type": "full_time",
            "max_night_shifts": 2,
            "min_night_shifts": 4
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_member_rejects_max_out_of_range() {
    let server = test_server_with_members(vec![]).await;

    let response = server
        .post("/api/v1/members")
        .json(&json!({
            "name": "Too Many Nights",
            "qualification": "nurse",
            "employment_type": "full_time",
            "max_night_shifts": 7
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_member_by_id_returns_member() {
    let id = Uuid::new_v4();
    let member = create_sample_member(id, "Binh Tran");
    let server = test_server_with_members(vec![member]).await;

    let response = server.get(&format!("/api/v1/members/{}", id)).await;
    response.assert_status_ok();
    let body: ApiResponse<MemberSerializer> = response.json();
    assert_eq!(body.data.id, id);
}

#[tokio::test]
async fn get_member_by_id_returns_not_found() {
    let server = test_server_with_members(vec![]).await;
    let response = server.get(&format!("/api/v1/members/{}", Uuid::new_v4())).await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn list_members_paginates() {
    let members = vec![
        create_sample_member(Uuid::new_v4(), "One"),
        create_sample_member(Uuid::new_v4(), "Two"),
        create_sample_member(Uuid::new_v4(), "Three"),
    ];
    let server = test_server_with_members(members).await;

    let response = server.get("/api/v1/members?page=1&page_size=2").await;
    response.assert_status_ok();
    let body: ApiResponse<Vec<MemberSerializer>> = response.json();
    assert_eq!(body.data.len(), 2);
    assert_eq!(body.total, Some(3));
}

#[tokio::test]
async fn update_member_changes_fields() {
    let id = Uuid::new_v4();
    let member = create_sample_member(id, "Original Name");
    let server = test_server_with_members(vec![member]).await;

    let response = server
        .put(&format!("/api/v1/members/{}", id))
        .json(&json!({ "name": "Updated Name" }))
        .await;

    response.assert_status_ok();
    let body: ApiResponse<MemberSerializer> = response.json();
    assert_eq!(body.data.name, "Updated Name");
}

#[tokio::test]
async fn update_member_rejects_bad_bounds() {
    let id = Uuid::new_v4();
    let member = create_sample_member(id, "Bounded");
    let server = test_server_with_members(vec![member]).await;

    let response = server
        .put(&format!("/api/v1/members/{}", id))
        .json(&json!({ "min_night_shifts": 5, "max_night_shifts": 2 }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_member_returns_not_found() {
    let server = test_server_with_members(vec![]).await;
    let response = server
        .put(&format!("/api/v1/members/{}", Uuid::new_v4()))
        .json(&json!({ "name": "Nobody" }))
        .await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn delete_member_removes_it() {
    let id = Uuid::new_v4();
    let member = create_sample_member(id, "To Delete");
    let server = test_server_with_members(vec![member]).await;

    let response = server.delete(&format!("/api/v1/members/{}", id)).await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let follow_up = server.get(&format!("/api/v1/members/{}", id)).await;
    follow_up.assert_status_not_found();
}

#[tokio::test]
async fn delete_member_returns_not_found() {
    let server = test_server_with_members(vec![]).await;
    let response = server.delete(&format!("/api/v1/members/{}", Uuid::new_v4())).await;
    response.assert_status_not_found();
}
