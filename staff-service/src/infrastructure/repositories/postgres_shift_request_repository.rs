use async_trait::async_trait;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::requests::{CreateShiftRequestRequest, UpdateShiftRequestRequest};
use crate::domain::entities::ShiftRequest;
use crate::domain::repositories::ShiftRequestRepository;

pub struct PostgresShiftRequestRepository {
    pool: PgPool,
}

impl PostgresShiftRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShiftRequestRepository for PostgresShiftRequestRepository {
    async fn create(&self, request: CreateShiftRequestRequest) -> DomainResult<ShiftRequest> {
        let shift_request = sqlx::query_as::<_, ShiftRequest>(
            r#"
            INSERT INTO shift_requests (member_id, date, request_type)
            VALUES ($1, $2, $3)
            RETURNING id, member_id, date, request_type, created_at
            "#,
        )
        .bind(request.member_id)
        .bind(request.date)
        .bind(&request.request_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::Conflict(format!(
                    "a shift request already exists for member {} on {}",
                    request.member_id, request.date
                ))
            }
            _ => DomainError::DatabaseError(e.to_string()),
        })?;

        Ok(shift_request)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ShiftRequest>> {
        let shift_request = sqlx::query_as::<_, ShiftRequest>(
            r#"
            SELECT id, member_id, date, request_type, created_at
            FROM shift_requests
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(shift_request)
    }

    async fn list_by_year_month(&self, year_month: &str) -> DomainResult<Vec<ShiftRequest>> {
        let requests = sqlx::query_as::<_, ShiftRequest>(
            r#"
            SELECT id, member_id, date, request_type, created_at
            FROM shift_requests
            WHERE to_char(date, 'YYYY-MM') = $1
            ORDER BY date, member_id
            "#,
        )
        .bind(year_month)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(requests)
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateShiftRequestRequest,
    ) -> DomainResult<ShiftRequest> {
        let current = self.find_by_id(id).await?.ok_or_else(|| {
            DomainError::NotFound(format!("Shift request with id {} not found", id))
        })?;

        let shift_request = sqlx::query_as::<_, ShiftRequest>(
            r#"
            UPDATE shift_requests
            SET request_type = $1
            WHERE id = $2
            RETURNING id, member_id, date, request_type, created_at
            "#,
        )
        .bind(request.request_type.unwrap_or(current.request_type))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(shift_request)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM shift_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Shift request with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
