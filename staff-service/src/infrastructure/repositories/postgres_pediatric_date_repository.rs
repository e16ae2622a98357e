use async_trait::async_trait;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::requests::CreatePediatricDateRequest;
use crate::domain::entities::PediatricDate;
use crate::domain::repositories::PediatricDateRepository;

pub struct PostgresPediatricDateRepository {
    pool: PgPool,
}

impl PostgresPediatricDateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PediatricDateRepository for PostgresPediatricDateRepository {
    async fn create(&self, request: CreatePediatricDateRequest) -> DomainResult<PediatricDate> {
        let entry = sqlx::query_as::<_, PediatricDate>(
            r#"
            INSERT INTO pediatric_dates (date)
            VALUES ($1)
            ON CONFLICT (date) DO UPDATE SET date = EXCLUDED.date
            RETURNING id, date, created_at
            "#,
        )
        .bind(request.date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(entry)
    }

    async fn list_by_year_month(&self, year_month: &str) -> DomainResult<Vec<PediatricDate>> {
        let dates = sqlx::query_as::<_, PediatricDate>(
            r#"
            SELECT id, date, created_at
            FROM pediatric_dates
            WHERE to_char(date, 'YYYY-MM') = $1
            ORDER BY date
            "#,
        )
        .bind(year_month)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(dates)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM pediatric_dates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Pediatric date with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
