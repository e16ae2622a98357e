use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{ApiResponse, DomainError};
use uuid::Uuid;

use crate::api::handlers::shift_request_handlers::YearMonthQuery;
use crate::api::requests::CreatePediatricDateRequest;
use crate::api::state::AppState;
use crate::presentation::PediatricDateSerializer;

/// Flag a date as having a visiting pediatric doctor
#[utoipa::path(
    post,
    path = "/api/v1/pediatric-dates",
    request_body = CreatePediatricDateRequest,
    responses(
        (status = 201, description = "Pediatric date created successfully", body = ApiResponse<PediatricDateSerializer>),
        (status = 500, description = "Internal server error")
    ),
    tag = "pediatric-dates"
)]
pub async fn create_pediatric_date(
    State(state): State<AppState>,
    Json(request): Json<CreatePediatricDateRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let entry = state
        .pediatric_date_repo
        .create(request)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Pediatric date created successfully",
            PediatricDateSerializer::from(entry),
        )),
    ))
}

/// List pediatric-doctor dates for a given year-month ("YYYY-MM")
#[utoipa::path(
    get,
    path = "/api/v1/pediatric-dates",
    params(YearMonthQuery),
    responses(
        (status = 200, description = "Pediatric date list", body = ApiResponse<Vec<PediatricDateSerializer>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "pediatric-dates"
)]
pub async fn list_pediatric_dates(
    State(state): State<AppState>,
    Query(query): Query<YearMonthQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let dates = state
        .pediatric_date_repo
        .list_by_year_month(&query.year_month)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serialized: Vec<PediatricDateSerializer> =
        dates.into_iter().map(PediatricDateSerializer::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Pediatric date list retrieved successfully",
            serialized,
        )),
    ))
}

/// Delete a pediatric date by ID
#[utoipa::path(
    delete,
    path = "/api/v1/pediatric-dates/{id}",
    params(("id" = Uuid, Path, description = "Pediatric date ID")),
    responses(
        (status = 204, description = "Pediatric date deleted successfully"),
        (status = 404, description = "Pediatric date not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "pediatric-dates"
)]
pub async fn delete_pediatric_date(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .pediatric_date_repo
        .delete(id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
