use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::RequestType;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::ShiftRequest;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShiftRequestSerialize {
    pub id: Uuid,
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub request_type: RequestType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShiftRequest> for ShiftRequestSerialize {
    fn from(request: ShiftRequest) -> Self {
        Self {
            id: request.id,
            member_id: request.member_id,
            date: request.date,
            request_type: request.request_type,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}
