use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNgPairRequest {
    pub member_a_id: Uuid,
    pub member_b_id: Uuid,
}
