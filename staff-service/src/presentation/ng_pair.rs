use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::NgPair;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NgPairSerializer {
    pub id: Uuid,
    pub member_a_id: Uuid,
    pub member_b_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<NgPair> for NgPairSerializer {
    fn from(pair: NgPair) -> Self {
        Self {
            id: pair.id,
            member_a_id: pair.member_a_id,
            member_b_id: pair.member_b_id,
            created_at: pair.created_at,
        }
    }
}
