use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::RequestType;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A member's day-off / paid-leave / day-shift preference for a single
/// date. At most one request exists per (member_id, date).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ShiftRequest {
    pub id: Uuid,
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub request_type: RequestType,
    pub created_at: DateTime<Utc>,
}
