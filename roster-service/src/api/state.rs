use std::sync::Arc;

use crate::domain::repositories::{ScheduleRepository, ShiftRequestRepository};
use crate::infrastructure::staff_client::StaffServiceClient;

#[derive(Clone)]
pub struct AppState {
    pub schedule_repo: Arc<dyn ScheduleRepository>,
    pub shift_request_repo: Arc<dyn ShiftRequestRepository>,
    pub staff_client: Arc<dyn StaffServiceClient>,
}

impl AppState {
    pub fn new(
        schedule_repo: Arc<dyn ScheduleRepository>,
        shift_request_repo: Arc<dyn ShiftRequestRepository>,
        staff_client: Arc<dyn StaffServiceClient>,
    ) -> Self {
        Self {
            schedule_repo,
            shift_request_repo,
            staff_client,
        }
    }
}
