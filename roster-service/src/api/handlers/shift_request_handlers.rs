use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::ApiResponse;
use utoipa::IntoParams;

use crate::api::requests::CreateShiftRequestRequest;
use crate::api::state::AppState;
use crate::domain::error::RosterError;
use crate::presentation::ShiftRequestSerialize;

#[derive(Debug, Deserialize, IntoParams)]
pub struct YearMonthQuery {
    pub year_month: String,
}

/// Create a day-off / paid-leave / day-shift-preference request.
///
/// Persisted in `roster-service`'s own schema (§6) rather than
/// `staff-service`'s — requests live in the same transactional scope as
/// the generator that consumes them.
#[utoipa::path(
    post,
    path = "/api/v1/shift-requests",
    request_body = CreateShiftRequestRequest,
    responses(
        (status = 201, description = "Request created", body = ApiResponse<ShiftRequestSerialize>),
        (status = 409, description = "A request already exists for this member and date")
    ),
    tag = "shift-requests"
)]
pub async fn create_shift_request(
    State(state): State<AppState>,
    Json(request): Json<CreateShiftRequestRequest>,
) -> Result<impl IntoResponse, RosterError> {
    let created = state
        .shift_request_repo
        .create(request.member_id, request.date, request.request_type)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Shift request created",
            ShiftRequestSerialize::from(created),
        )),
    ))
}

/// List requests for a calendar month.
#[utoipa::path(
    get,
    path = "/api/v1/shift-requests",
    params(YearMonthQuery),
    responses(
        (status = 200, description = "Requests for the month", body = ApiResponse<Vec<ShiftRequestSerialize>>)
    ),
    tag = "shift-requests"
)]
pub async fn list_shift_requests(
    State(state): State<AppState>,
    Query(params): Query<YearMonthQuery>,
) -> Result<impl IntoResponse, RosterError> {
    let requests = state
        .shift_request_repo
        .list_by_year_month(&params.year_month)
        .await?;

    let serialized: Vec<ShiftRequestSerialize> =
        requests.into_iter().map(ShiftRequestSerialize::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Shift requests retrieved", serialized)),
    ))
}
