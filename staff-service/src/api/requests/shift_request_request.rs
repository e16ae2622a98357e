use chrono::NaiveDate;
use serde::Deserialize;
use shared::RequestType;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShiftRequestRequest {
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub request_type: RequestType,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateShiftRequestRequest {
    pub request_type: Option<RequestType>,
}
