#[path = "common/mod.rs"]
mod common;

use std::sync::Arc;

use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::json;
use shared::ApiResponse;
use uuid::Uuid;

use common::{
    create_sample_member, create_test_app_state, MockScheduleRepository, MockShiftRequestRepository,
    MockStaffServiceClient,
};
use roster_service::presentation::{GenerateResultSerialize, ScheduleViewSerialize, ShiftRequestSerialize};

/// 15 fully-capable full-time members — enough slack to satisfy every
/// `StaffingRequirement` row on a weekday without any request conflicts,
/// matching seed scenario S-A (spec.md §8).
fn fully_capable_roster(count: usize) -> Vec<roster_service::domain::loader::MemberRecord> {
    use shared::CapabilityType::*;
    (0..count)
        .map(|i| {
            let mut member = create_sample_member(Uuid::new_v4(), &format!("Member {i}"));
            member.qualification = shared::Qualification::Midwife;
            member.capabilities = [
                OutpatientLeader,
                WardLeader,
                NightLeader,
                DayShift,
                NightShift,
                Beauty,
                MwOutpatient,
                WardStaff,
                EarlyShift,
            ]
            .into_iter()
            .collect();
            member
        })
        .collect()
}

async fn test_server(
    members: Vec<roster_service::domain::loader::MemberRecord>,
) -> TestServer {
    let schedule_repo = Arc::new(MockScheduleRepository::new());
    let shift_request_repo = Arc::new(MockShiftRequestRepository::new());
    let staff_client = Arc::new(MockStaffServiceClient::with_members(members));

    let app_state = create_test_app_state(schedule_repo, shift_request_repo, staff_client);
    let app = roster_service::api::create_router(app_state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn health_check_returns_healthy() {
    let server = test_server(vec![]).await;
    let response = server.get("/api/v1/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn generate_schedule_persists_and_returns_a_published_roster() {
    let server = test_server(fully_capable_roster(15)).await;

    let response = server.post("/api/v1/schedules/2025-01/generate").await;

    response.assert_status_ok();
    let body: ApiResponse<GenerateResultSerialize> = response.json();
    assert_eq!(body.data.schedule.status, shared::ScheduleStatus::Published);
    assert!(!body.data.assignments.is_empty());
    assert!(body.data.unfulfilled_requests.is_empty());
}

#[tokio::test]
async fn generate_schedule_is_idempotent_and_replaces_prior_assignments() {
    let server = test_server(fully_capable_roster(15)).await;

    let first = server.post("/api/v1/schedules/2025-01/generate").await;
    first.assert_status_ok();
    let first_body: ApiResponse<GenerateResultSerialize> = first.json();
    let first_count = first_body.data.assignments.len();

    let second = server.post("/api/v1/schedules/2025-01/generate").await;
    second.assert_status_ok();
    let second_body: ApiResponse<GenerateResultSerialize> = second.json();

    assert_eq!(first_count, second_body.data.assignments.len());
}

#[tokio::test]
async fn get_schedule_returns_404_when_nothing_has_been_generated_yet() {
    let server = test_server(fully_capable_roster(15)).await;

    let response = server.get("/api/v1/schedules/2025-01").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn get_schedule_after_generate_echoes_the_persisted_assignments() {
    let server = test_server(fully_capable_roster(15)).await;
    server.post("/api/v1/schedules/2025-01/generate").await.assert_status_ok();

    let response = server.get("/api/v1/schedules/2025-01").await;
    response.assert_status_ok();
    let body: ApiResponse<ScheduleViewSerialize> = response.json();
    assert!(!body.data.assignments.is_empty());
}

#[tokio::test]
async fn generate_schedule_with_too_few_members_returns_422_with_diagnosis() {
    let server = test_server(fully_capable_roster(1)).await;

    let response = server.post("/api/v1/schedules/2025-01/generate").await;
    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn edit_assignment_upserts_and_returns_validator_warnings() {
    let server = test_server(fully_capable_roster(15)).await;
    server.post("/api/v1/schedules/2025-01/generate").await.assert_status_ok();

    let members_response = server.get("/api/v1/schedules/2025-01").await;
    let members_body: ApiResponse<ScheduleViewSerialize> = members_response.json();
    let member_id = members_body.data.assignments[0].member_id;

    let path = format!("/api/v1/schedules/2025-01/assignments/{member_id}/2025-01-10");
    let response = server
        .patch(&path)
        .json(&json!({ "shift_type": "ward", "is_early": false }))
        .await;

    response.assert_status_ok();
    let body: ApiResponse<roster_service::presentation::EditResultSerialize> = response.json();
    assert_eq!(body.data.assignment.shift_type, shared::ShiftType::Ward);
}

#[tokio::test]
async fn edit_assignment_returns_404_for_an_ungenerated_month() {
    let server = test_server(fully_capable_roster(15)).await;
    let member_id = Uuid::new_v4();

    let path = format!("/api/v1/schedules/2025-01/assignments/{member_id}/2025-01-10");
    let response = server
        .patch(&path)
        .json(&json!({ "shift_type": "ward", "is_early": false }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn create_shift_request_succeeds_then_rejects_a_duplicate() {
    let server = test_server(vec![]).await;
    let member_id = Uuid::new_v4();

    let response = server
        .post("/api/v1/shift-requests")
        .json(&json!({
            "member_id": member_id,
            "date": "2025-01-15",
            "request_type": "day_off",
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let conflict = server
        .post("/api/v1/shift-requests")
        .json(&json!({
            "member_id": member_id,
            "date": "2025-01-15",
            "request_type": "paid_leave",
        }))
        .await;
    conflict.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn list_shift_requests_filters_to_the_requested_month() {
    let server = test_server(vec![]).await;
    let member_id = Uuid::new_v4();

    server
        .post("/api/v1/shift-requests")
        .json(&json!({ "member_id": member_id, "date": "2025-01-15", "request_type": "day_off" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
    server
        .post("/api/v1/shift-requests")
        .json(&json!({ "member_id": member_id, "date": "2025-02-01", "request_type": "day_off" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.get("/api/v1/shift-requests?year_month=2025-01").await;
    response.assert_status_ok();
    let body: ApiResponse<Vec<ShiftRequestSerialize>> = response.json();
    assert_eq!(body.data.len(), 1);
    assert_eq!(body.data[0].date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
}
