use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{ScheduleStatus, ShiftType};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::{Schedule, ShiftAssignment};
use crate::domain::generator::UnfulfilledRequest;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScheduleSerialize {
    pub id: Uuid,
    pub year_month: String,
    pub status: ScheduleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Schedule> for ScheduleSerialize {
    fn from(schedule: Schedule) -> Self {
        Self {
            id: schedule.id,
            year_month: schedule.year_month,
            status: schedule.status,
            created_at: schedule.created_at,
            updated_at: schedule.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShiftAssignmentSerialize {
    pub id: Uuid,
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub shift_type: ShiftType,
    pub is_early: bool,
}

impl From<ShiftAssignment> for ShiftAssignmentSerialize {
    fn from(assignment: ShiftAssignment) -> Self {
        Self {
            id: assignment.id,
            member_id: assignment.member_id,
            date: assignment.date,
            shift_type: assignment.shift_type,
            is_early: assignment.is_early,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UnfulfilledRequestSerialize {
    pub member_id: Uuid,
    pub date: NaiveDate,
}

impl From<UnfulfilledRequest> for UnfulfilledRequestSerialize {
    fn from(request: UnfulfilledRequest) -> Self {
        Self {
            member_id: request.member_id,
            date: request.date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResultSerialize {
    pub schedule: ScheduleSerialize,
    pub assignments: Vec<ShiftAssignmentSerialize>,
    pub unfulfilled_requests: Vec<UnfulfilledRequestSerialize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScheduleViewSerialize {
    pub schedule: ScheduleSerialize,
    pub assignments: Vec<ShiftAssignmentSerialize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EditResultSerialize {
    pub assignment: ShiftAssignmentSerialize,
    pub warnings: Vec<String>,
}
