use serde::Deserialize;
use shared::ShiftType;
use utoipa::ToSchema;

/// Body of `PATCH /api/v1/schedules/:year_month/assignments/:member_id/:date`
/// (§11). A single-assignment edit — never triggers re-solve, only the
/// §9 validator.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EditAssignmentRequest {
    pub shift_type: ShiftType,
    #[serde(default)]
    pub is_early: bool,
}
