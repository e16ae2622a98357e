use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use shared::ApiResponse;
use uuid::Uuid;

use crate::api::requests::EditAssignmentRequest;
use crate::api::state::AppState;
use crate::domain::entities::NewShiftAssignment;
use crate::domain::error::RosterError;
use crate::domain::generator::{GenerationContext, RosterGenerator};
use crate::domain::loader::HttpRosterInputLoader;
use crate::domain::validator::{self, AssignmentView, MemberView};
use crate::presentation::{
    EditResultSerialize, GenerateResultSerialize, ScheduleViewSerialize, ShiftAssignmentSerialize,
};

/// Generate (or regenerate) a month's roster.
///
/// Runs the full LOAD -> STEP1 -> STEP2 -> DIAGNOSE state machine (§4.6)
/// and, on success, replaces the month's persisted assignments inside one
/// transaction. Infeasible outcomes surface as `422` carrying the §7
/// formatted diagnostic message; they never leave prior assignments
/// half-replaced, since the replace only happens after a successful solve.
#[utoipa::path(
    post,
    path = "/api/v1/schedules/{year_month}/generate",
    params(("year_month" = String, Path, description = "Target month, YYYY-MM")),
    responses(
        (status = 200, description = "Roster generated and persisted", body = GenerateResultSerialize),
        (status = 422, description = "No feasible roster; diagnostic message included"),
        (status = 500, description = "Internal server error")
    ),
    tag = "schedules"
)]
pub async fn generate_schedule(
    State(state): State<AppState>,
    Path(year_month): Path<String>,
) -> Result<impl IntoResponse, RosterError> {
    let loader = HttpRosterInputLoader::new(state.staff_client.clone(), state.shift_request_repo.clone());
    let ctx = GenerationContext::load(&loader, &year_month).await?;
    let outcome = RosterGenerator::generate(&ctx)?;

    let schedule = state.schedule_repo.find_or_create(&year_month).await?;

    let new_assignments: Vec<NewShiftAssignment> = outcome
        .assignments
        .iter()
        .map(|a| NewShiftAssignment {
            member_id: a.member_id,
            date: a.date,
            shift_type: a.shift_type,
            is_early: a.is_early,
        })
        .collect();

    state
        .schedule_repo
        .replace_assignments(schedule.id, new_assignments)
        .await?;

    let persisted = state.schedule_repo.list_assignments(schedule.id).await?;
    let schedule = state
        .schedule_repo
        .find_by_year_month(&year_month)
        .await?
        .expect("just written above");

    let response = GenerateResultSerialize {
        schedule: schedule.into(),
        assignments: persisted.into_iter().map(ShiftAssignmentSerialize::from).collect(),
        unfulfilled_requests: outcome
            .unfulfilled_requests
            .into_iter()
            .map(Into::into)
            .collect(),
    };

    Ok((StatusCode::OK, Json(ApiResponse::success("Roster generated", response))))
}

/// Fetch the current roster and status for a month.
#[utoipa::path(
    get,
    path = "/api/v1/schedules/{year_month}",
    params(("year_month" = String, Path, description = "Target month, YYYY-MM")),
    responses(
        (status = 200, description = "Roster found", body = ScheduleViewSerialize),
        (status = 404, description = "No roster exists for this month")
    ),
    tag = "schedules"
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(year_month): Path<String>,
) -> Result<impl IntoResponse, RosterError> {
    let schedule = state
        .schedule_repo
        .find_by_year_month(&year_month)
        .await?
        .ok_or_else(|| RosterError::Domain(shared::DomainError::NotFound(format!(
            "no roster exists for {year_month}"
        ))))?;

    let assignments = state.schedule_repo.list_assignments(schedule.id).await?;

    let response = ScheduleViewSerialize {
        schedule: schedule.into(),
        assignments: assignments.into_iter().map(ShiftAssignmentSerialize::from).collect(),
    };

    Ok((StatusCode::OK, Json(ApiResponse::success("Roster retrieved", response))))
}

/// Single-assignment manual edit (§11 PATCH endpoint).
///
/// Always returns `200` with the committed assignment plus a
/// `warnings: Vec<String>` field from the §9 validator — the edit itself
/// never fails on a constraint violation, only on a missing schedule.
#[utoipa::path(
    patch,
    path = "/api/v1/schedules/{year_month}/assignments/{member_id}/{date}",
    params(
        ("year_month" = String, Path, description = "Target month, YYYY-MM"),
        ("member_id" = Uuid, Path, description = "Member ID"),
        ("date" = String, Path, description = "Date, YYYY-MM-DD")
    ),
    request_body = EditAssignmentRequest,
    responses(
        (status = 200, description = "Assignment edited", body = EditResultSerialize),
        (status = 404, description = "No roster exists for this month")
    ),
    tag = "schedules"
)]
pub async fn edit_assignment(
    State(state): State<AppState>,
    Path((year_month, member_id, date)): Path<(String, Uuid, NaiveDate)>,
    Json(request): Json<EditAssignmentRequest>,
) -> Result<impl IntoResponse, RosterError> {
    let schedule = state
        .schedule_repo
        .find_by_year_month(&year_month)
        .await?
        .ok_or_else(|| RosterError::Domain(shared::DomainError::NotFound(format!(
            "no roster exists for {year_month}"
        ))))?;

    let assignment = state
        .schedule_repo
        .upsert_assignment(schedule.id, member_id, date, request.shift_type, request.is_early)
        .await?;

    let persisted = state.schedule_repo.list_assignments(schedule.id).await?;
    let members = state.staff_client.list_members().await?;

    let assignment_views: Vec<AssignmentView> = persisted
        .iter()
        .map(|a| AssignmentView {
            member_id: a.member_id,
            date: a.date,
            shift_type: a.shift_type,
        })
        .collect();
    let member_views: Vec<MemberView> = members
        .into_iter()
        .map(|m| MemberView {
            id: m.id,
            name: m.name,
            qualification: m.qualification,
            max_night_shifts: m.max_night_shifts,
            min_night_shifts: m.min_night_shifts,
        })
        .collect();

    let warnings = validator::check_assignment_warnings(&assignment_views, &member_views, member_id, date);

    let response = EditResultSerialize {
        assignment: assignment.into(),
        warnings,
    };

    Ok((StatusCode::OK, Json(ApiResponse::success("Assignment edited", response))))
}
