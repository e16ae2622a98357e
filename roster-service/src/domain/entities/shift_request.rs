use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, RequestType, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A member's day-off / paid-leave / day-shift preference for a single
/// date, owned by `roster-service`'s own schema (§SPEC_FULL module 6 —
/// kept local rather than fetched from `staff-service`, since requests
/// and published schedules live in the same transactional scope as the
/// generator that consumes them).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ShiftRequest {
    pub id: Uuid,
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub request_type: RequestType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for ShiftRequest {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for ShiftRequest {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
