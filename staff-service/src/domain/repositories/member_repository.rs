use async_trait::async_trait;
use shared::{DomainResult, PaginationParams};
use uuid::Uuid;

use crate::api::requests::{CreateMemberRequest, UpdateMemberRequest};
use crate::domain::entities::Member;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create(&self, request: CreateMemberRequest) -> DomainResult<Member>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Member>>;

    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Member>, u64)>;

    /// All members, unpaginated. Used by the roster generator's loader,
    /// which needs the full workforce for a given month in one shot.
    async fn list_all(&self) -> DomainResult<Vec<Member>>;

    async fn update(&self, id: Uuid, request: UpdateMemberRequest) -> DomainResult<Member>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
