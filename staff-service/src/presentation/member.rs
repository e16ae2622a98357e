use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{CapabilityType, EmploymentType, Qualification};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::Member;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberSerializer {
    pub id: Uuid,
    pub name: String,
    pub qualification: Qualification,
    pub employment_type: EmploymentType,
    pub max_night_shifts: i32,
    pub min_night_shifts: i32,
    pub night_shift_deduction_balance: i32,
    pub capabilities: Vec<CapabilityType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Member> for MemberSerializer {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            qualification: member.qualification,
            employment_type: member.employment_type,
            max_night_shifts: member.max_night_shifts,
            min_night_shifts: member.min_night_shifts,
            night_shift_deduction_balance: member.night_shift_deduction_balance,
            capabilities: member.capabilities,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}
