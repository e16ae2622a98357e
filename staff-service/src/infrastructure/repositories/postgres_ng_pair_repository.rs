use async_trait::async_trait;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::requests::CreateNgPairRequest;
use crate::domain::entities::NgPair;
use crate::domain::repositories::NgPairRepository;

pub struct PostgresNgPairRepository {
    pool: PgPool,
}

impl PostgresNgPairRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NgPairRepository for PostgresNgPairRepository {
    async fn create(&self, request: CreateNgPairRequest) -> DomainResult<NgPair> {
        let (a, b) = NgPair::normalize(request.member_a_id, request.member_b_id);

        let pair = sqlx::query_as::<_, NgPair>(
            r#"
            INSERT INTO ng_pairs (member_a_id, member_b_id)
            VALUES ($1, $2)
            RETURNING id, member_a_id, member_b_id, created_at
            "#,
        )
        .bind(a)
        .bind(b)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(pair)
    }

    async fn list_all(&self) -> DomainResult<Vec<NgPair>> {
        let pairs = sqlx::query_as::<_, NgPair>(
            r#"
            SELECT id, member_a_id, member_b_id, created_at
            FROM ng_pairs
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(pairs)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM ng_pairs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Ng-pair with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
