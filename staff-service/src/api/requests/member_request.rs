use serde::Deserialize;
use shared::{CapabilityType, EmploymentType, Qualification};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMemberRequest {
    pub name: String,
    pub qualification: Qualification,
    pub employment_type: EmploymentType,
    pub max_night_shifts: i32,
    #[serde(default)]
    pub min_night_shifts: i32,
    #[serde(default)]
    pub night_shift_deduction_balance: i32,
    #[serde(default)]
    pub capabilities: Vec<CapabilityType>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub qualification: Option<Qualification>,
    pub employment_type: Option<EmploymentType>,
    pub max_night_shifts: Option<i32>,
    pub min_night_shifts: Option<i32>,
    pub night_shift_deduction_balance: Option<i32>,
    pub capabilities: Option<Vec<CapabilityType>>,
}
