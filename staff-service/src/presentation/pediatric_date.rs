use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::PediatricDate;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PediatricDateSerializer {
    pub id: Uuid,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<PediatricDate> for PediatricDateSerializer {
    fn from(entry: PediatricDate) -> Self {
        Self {
            id: entry.id,
            date: entry.date,
            created_at: entry.created_at,
        }
    }
}
