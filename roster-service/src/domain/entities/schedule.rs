use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, ScheduleStatus, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One generated-or-edited monthly roster. `year_month` ("YYYY-MM") is
/// unique (§6) — regenerating a month replaces its schedule's assignments
/// rather than creating a second schedule.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Schedule {
    pub id: Uuid,
    pub year_month: String,
    pub status: ScheduleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Schedule {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Schedule {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
