use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DomainError, DomainResult, RequestType};
use sqlx::PgPool;
use uuid::Uuid;

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
    async fn create(
        &self,
        member_id: Uuid,
        date: NaiveDate,
        request_type: RequestType,
    ) -> DomainResult<ShiftRequest> {
        sqlx::query_as::<_, ShiftRequest>(
            r#"
            INSERT INTO shift_requests (member_id, date, request_type)
            VALUES ($1, $2, $3)
            RETURNING id, member_id, date, request_type, created_at, updated_at
            "#,
        )
        .bind(member_id)
        .bind(date)
        .bind(request_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::Conflict(format!(
                    "a shift request already exists for member {member_id} on {date}"
                ))
            }
            _ => DomainError::DatabaseError(e.to_string()),
        })
    }

    async fn list_by_year_month(&self, year_month: &str) -> DomainResult<Vec<ShiftRequest>> {
        sqlx::query_as::<_, ShiftRequest>(
            r#"
            SELECT id, member_id, date, request_type, created_at, updated_at
            FROM shift_requests
            WHERE to_char(date, 'YYYY-MM') = $1
            ORDER BY date, member_id
            "#,
        )
        .bind(year_month)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))
    }
}
