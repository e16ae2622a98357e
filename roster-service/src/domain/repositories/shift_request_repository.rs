use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DomainResult, RequestType};
use uuid::Uuid;

use crate::domain::entities::ShiftRequest;

/// `roster-service`'s own request store (§SPEC_FULL module 6) — distinct
/// from `staff-service`'s CRUD copy, since requests live in the same
/// transactional scope as the generator that consumes them.
#[async_trait]
pub trait ShiftRequestRepository: Send + Sync {
    async fn create(
        &self,
        member_id: Uuid,
        date: NaiveDate,
        request_type: RequestType,
    ) -> DomainResult<ShiftRequest>;

    /// All requests whose date falls in `year_month` ("YYYY-MM") — the
    /// unit `RosterInputLoader::load_requests` consumes one month at a
    /// time.
    async fn list_by_year_month(&self, year_month: &str) -> DomainResult<Vec<ShiftRequest>>;
}
