use async_trait::async_trait;
use shared::DomainResult;
use uuid::Uuid;

use crate::api::requests::CreateNgPairRequest;
use crate::domain::entities::NgPair;

#[async_trait]
pub trait NgPairRepository: Send + Sync {
    async fn create(&self, request: CreateNgPairRequest) -> DomainResult<NgPair>;

    /// All ng-pairs, unpaginated — the set is always small relative to
    /// the workforce.
    async fn list_all(&self) -> DomainResult<Vec<NgPair>>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
