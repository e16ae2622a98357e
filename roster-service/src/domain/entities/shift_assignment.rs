use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, ShiftType, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One member's shift on one date within a schedule. Unique on
/// `(member_id, date)` except for `ward_free`/`outpatient_free`, which are
/// exempt from the uniqueness constraint since a member can carry a
/// multi-assignable shift alongside another entry that day (§6).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ShiftAssignment {
    pub id: Uuid,
    pub schedule_id: Uuid,
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub shift_type: ShiftType,
    pub is_early: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for ShiftAssignment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for ShiftAssignment {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// A new assignment row bound for insertion — no `id`/timestamps yet.
#[derive(Debug, Clone)]
pub struct NewShiftAssignment {
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub shift_type: ShiftType,
    pub is_early: bool,
}
