use async_trait::async_trait;
use shared::DomainResult;
use uuid::Uuid;

use crate::api::requests::CreatePediatricDateRequest;
use crate::domain::entities::PediatricDate;

#[async_trait]
pub trait PediatricDateRepository: Send + Sync {
    async fn create(&self, request: CreatePediatricDateRequest) -> DomainResult<PediatricDate>;

    async fn list_by_year_month(&self, year_month: &str) -> DomainResult<Vec<PediatricDate>>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
