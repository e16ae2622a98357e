use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{CapabilityType, EmploymentType, Identifiable, Qualification, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A nurse, associate nurse, or midwife eligible for shift assignment.
///
/// `max_night_shifts`/`min_night_shifts` bound how many night shifts the
/// roster generator may hand this member in a month; `capabilities` gates
/// which shift types they are eligible for at all.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub qualification: Qualification,
    pub employment_type: EmploymentType,
    pub max_night_shifts: i32,
    pub min_night_shifts: i32,
    /// Accumulates prior under-use of the night-shift ceiling; feeds the
    /// off-day quota derivation, not enforced as a constraint itself.
    pub night_shift_deduction_balance: i32,
    pub capabilities: Vec<CapabilityType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Member {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Member {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
