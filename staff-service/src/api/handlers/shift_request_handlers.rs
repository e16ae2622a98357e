use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::{ApiResponse, DomainError};
use uuid::Uuid;

use crate::api::requests::{CreateShiftRequestRequest, UpdateShiftRequestRequest};
use crate::api::state::AppState;
use crate::presentation::ShiftRequestSerializer;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct YearMonthQuery {
    pub year_month: String,
}

/// Create a new shift request
#[utoipa::path(
    post,
    path = "/api/v1/shift-requests",
    request_body = CreateShiftRequestRequest,
    responses(
        (status = 201, description = "Shift request created successfully", body = ApiResponse<ShiftRequestSerializer>),
        (status = 500, description = "Internal server error")
    ),
    tag = "shift-requests"
)]
pub async fn create_shift_request(
    State(state): State<AppState>,
    Json(request): Json<CreateShiftRequestRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let shift_request = state
        .shift_request_repo
        .create(request)
        .await
        .map_err(|e| match e {
            DomainError::Conflict(_) => (StatusCode::CONFLICT, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Shift request created successfully",
            ShiftRequestSerializer::from(shift_request),
        )),
    ))
}

/// List shift requests for a given year-month ("YYYY-MM")
#[utoipa::path(
    get,
    path = "/api/v1/shift-requests",
    params(YearMonthQuery),
    responses(
        (status = 200, description = "Shift request list", body = ApiResponse<Vec<ShiftRequestSerializer>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "shift-requests"
)]
pub async fn list_shift_requests(
    State(state): State<AppState>,
    Query(query): Query<YearMonthQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let requests = state
        .shift_request_repo
        .list_by_year_month(&query.year_month)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serialized: Vec<ShiftRequestSerializer> =
        requests.into_iter().map(ShiftRequestSerializer::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Shift request list retrieved successfully",
            serialized,
        )),
    ))
}

/// Update a shift request's type
#[utoipa::path(
    put,
    path = "/api/v1/shift-requests/{id}",
    params(("id" = Uuid, Path, description = "Shift request ID")),
    request_body = UpdateShiftRequestRequest,
    responses(
        (status = 200, description = "Shift request updated successfully", body = ApiResponse<ShiftRequestSerializer>),
        (status = 404, description = "Shift request not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "shift-requests"
)]
pub async fn update_shift_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateShiftRequestRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let shift_request = state
        .shift_request_repo
        .update(id, request)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Shift request updated successfully",
            ShiftRequestSerializer::from(shift_request),
        )),
    ))
}

/// Delete a shift request by ID
#[utoipa::path(
    delete,
    path = "/api/v1/shift-requests/{id}",
    params(("id" = Uuid, Path, description = "Shift request ID")),
    responses(
        (status = 204, description = "Shift request deleted successfully"),
        (status = 404, description = "Shift request not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "shift-requests"
)]
pub async fn delete_shift_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .shift_request_repo
        .delete(id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
