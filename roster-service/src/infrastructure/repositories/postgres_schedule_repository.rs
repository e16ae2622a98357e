use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DomainError, DomainResult, ShiftType};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{NewShiftAssignment, Schedule, ShiftAssignment};
use crate::domain::repositories::ScheduleRepository;

pub struct PostgresScheduleRepository {
    pool: PgPool,
}

impl PostgresScheduleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PostgresScheduleRepository {
    async fn find_by_year_month(&self, year_month: &str) -> DomainResult<Option<Schedule>> {
        sqlx::query_as::<_, Schedule>(
            r#"
            SELECT id, year_month, status, created_at, updated_at
            FROM schedules
            WHERE year_month = $1
            "#,
        )
        .bind(year_month)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))
    }

    async fn find_or_create(&self, year_month: &str) -> DomainResult<Schedule> {
        if let Some(existing) = self.find_by_year_month(year_month).await? {
            return Ok(existing);
        }

        sqlx::query_as::<_, Schedule>(
            r#"
            INSERT INTO schedules (year_month, status)
            VALUES ($1, 'draft')
            ON CONFLICT (year_month) DO UPDATE SET year_month = EXCLUDED.year_month
            RETURNING id, year_month, status, created_at, updated_at
            "#,
        )
        .bind(year_month)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))
    }

    async fn replace_assignments(
        &self,
        schedule_id: Uuid,
        assignments: Vec<NewShiftAssignment>,
    ) -> DomainResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        sqlx::query("DELETE FROM shift_assignments WHERE schedule_id = $1")
            .bind(schedule_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        for assignment in &assignments {
            sqlx::query(
                r#"
                INSERT INTO shift_assignments (schedule_id, member_id, date, shift_type, is_early)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(schedule_id)
            .bind(assignment.member_id)
            .bind(assignment.date)
            .bind(assignment.shift_type)
            .bind(assignment.is_early)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        }

        sqlx::query("UPDATE schedules SET status = 'published', updated_at = NOW() WHERE id = $1")
            .bind(schedule_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn list_assignments(&self, schedule_id: Uuid) -> DomainResult<Vec<ShiftAssignment>> {
        sqlx::query_as::<_, ShiftAssignment>(
            r#"
            SELECT id, schedule_id, member_id, date, shift_type, is_early, created_at, updated_at
            FROM shift_assignments
            WHERE schedule_id = $1
            ORDER BY date, member_id
            "#,
        )
        .bind(schedule_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))
    }

    async fn upsert_assignment(
        &self,
        schedule_id: Uuid,
        member_id: Uuid,
        date: NaiveDate,
        shift_type: ShiftType,
        is_early: bool,
    ) -> DomainResult<ShiftAssignment> {
        sqlx::query_as::<_, ShiftAssignment>(
            r#"
            INSERT INTO shift_assignments (schedule_id, member_id, date, shift_type, is_early)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (schedule_id, member_id, date)
            WHERE shift_type NOT IN ('ward_free', 'outpatient_free')
            DO UPDATE SET shift_type = EXCLUDED.shift_type,
                          is_early = EXCLUDED.is_early,
                          updated_at = NOW()
            RETURNING id, schedule_id, member_id, date, shift_type, is_early, created_at, updated_at
            "#,
        )
        .bind(schedule_id)
        .bind(member_id)
        .bind(date)
        .bind(shift_type)
        .bind(is_early)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))
    }
}
