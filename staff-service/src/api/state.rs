use std::sync::Arc;

use crate::domain::repositories::{
    MemberRepository, NgPairRepository, PediatricDateRepository, ShiftRequestRepository,
};
use crate::infrastructure::redis::RedisPool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub member_repo: Arc<dyn MemberRepository>,
    pub ng_pair_repo: Arc<dyn NgPairRepository>,
    pub shift_request_repo: Arc<dyn ShiftRequestRepository>,
    pub pediatric_date_repo: Arc<dyn PediatricDateRepository>,
    pub redis_pool: RedisPool,
}

impl AppState {
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        ng_pair_repo: Arc<dyn NgPairRepository>,
        shift_request_repo: Arc<dyn ShiftRequestRepository>,
        pediatric_date_repo: Arc<dyn PediatricDateRepository>,
        redis_pool: RedisPool,
    ) -> Self {
        Self {
            member_repo,
            ng_pair_repo,
            shift_request_repo,
            pediatric_date_repo,
            redis_pool,
        }
    }
}
