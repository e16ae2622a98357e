use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{ApiResponse, DomainError};
use uuid::Uuid;

use crate::api::requests::CreateNgPairRequest;
use crate::api::state::AppState;
use crate::presentation::NgPairSerializer;

/// Create a new forbidden night-shift pairing
#[utoipa::path(
    post,
    path = "/api/v1/ng-pairs",
    request_body = CreateNgPairRequest,
    responses(
        (status = 201, description = "Ng-pair created successfully", body = ApiResponse<NgPairSerializer>),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "ng-pairs"
)]
pub async fn create_ng_pair(
    State(state): State<AppState>,
    Json(request): Json<CreateNgPairRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if request.member_a_id == request.member_b_id {
        return Err((
            StatusCode::BAD_REQUEST,
            "an ng-pair must reference two distinct members".to_string(),
        ));
    }

    let pair = state
        .ng_pair_repo
        .create(request)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Ng-pair created successfully",
            NgPairSerializer::from(pair),
        )),
    ))
}

/// List all forbidden night-shift pairings
#[utoipa::path(
    get,
    path = "/api/v1/ng-pairs",
    responses(
        (status = 200, description = "Ng-pair list", body = ApiResponse<Vec<NgPairSerializer>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "ng-pairs"
)]
pub async fn list_ng_pairs(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let pairs = state
        .ng_pair_repo
        .list_all()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serialized: Vec<NgPairSerializer> = pairs.into_iter().map(NgPairSerializer::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Ng-pair list retrieved successfully", serialized)),
    ))
}

/// Delete an ng-pair by ID
#[utoipa::path(
    delete,
    path = "/api/v1/ng-pairs/{id}",
    params(("id" = Uuid, Path, description = "Ng-pair ID")),
    responses(
        (status = 204, description = "Ng-pair deleted successfully"),
        (status = 404, description = "Ng-pair not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "ng-pairs"
)]
pub async fn delete_ng_pair(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state.ng_pair_repo.delete(id).await.map_err(|e| match e {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    Ok(StatusCode::NO_CONTENT)
}
