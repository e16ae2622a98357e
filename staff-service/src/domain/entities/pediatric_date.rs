use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A date flagged as having a visiting pediatric doctor. Raises the
/// `mw_outpatient` staffing minimum for that day.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PediatricDate {
    pub id: Uuid,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
