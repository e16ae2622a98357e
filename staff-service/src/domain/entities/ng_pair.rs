use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An unordered pair of members who must never both work a night shift on
/// the same date. Stored normalized so `member_a_id < member_b_id`, which
/// keeps the uniqueness constraint and lookups order-independent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NgPair {
    pub id: Uuid,
    pub member_a_id: Uuid,
    pub member_b_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl NgPair {
    pub fn normalize(member_a_id: Uuid, member_b_id: Uuid) -> (Uuid, Uuid) {
        if member_a_id <= member_b_id {
            (member_a_id, member_b_id)
        } else {
            (member_b_id, member_a_id)
        }
    }
}
