use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shared::DomainError;
use thiserror::Error;

/// Errors the generate/edit surface can produce (§7). Layered on top of
/// `shared::DomainError` the way the teacher's handlers map domain errors
/// to HTTP status, but collected into one type since the solver core has
/// several distinct infeasibility outcomes worth a 422, not a 500.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Both solve steps failed and diagnostics (static or relaxation)
    /// produced an actionable message block.
    #[error("{0}")]
    InfeasibleWithDiagnosis(String),

    /// Both solve steps and both diagnostic stages yielded nothing
    /// actionable.
    #[error("constraints cannot be satisfied")]
    InfeasibleGeneric,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RosterError::InfeasibleWithDiagnosis(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            RosterError::InfeasibleGeneric => (
                StatusCode::UNPROCESSABLE_ENTITY,
                self.to_string(),
            ),
            RosterError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            RosterError::Domain(DomainError::NotFound(_)) => (StatusCode::NOT_FOUND, self.to_string()),
            RosterError::Domain(DomainError::InvalidInput(_)) => (StatusCode::BAD_REQUEST, self.to_string()),
            RosterError::Domain(DomainError::Conflict(_)) => (StatusCode::CONFLICT, self.to_string()),
            RosterError::Domain(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
