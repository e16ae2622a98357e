use async_trait::async_trait;
use shared::DomainResult;
use uuid::Uuid;

use crate::api::requests::{CreateShiftRequestRequest, UpdateShiftRequestRequest};
use crate::domain::entities::ShiftRequest;

#[async_trait]
pub trait ShiftRequestRepository: Send + Sync {
    async fn create(&self, request: CreateShiftRequestRequest) -> DomainResult<ShiftRequest>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ShiftRequest>>;

    /// All requests whose date falls in the given year-month ("YYYY-MM"),
    /// the unit the roster generator loads one month at a time.
    async fn list_by_year_month(&self, year_month: &str) -> DomainResult<Vec<ShiftRequest>>;

    async fn update(
        &self,
        id: Uuid,
        request: UpdateShiftRequestRequest,
    ) -> DomainResult<ShiftRequest>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
