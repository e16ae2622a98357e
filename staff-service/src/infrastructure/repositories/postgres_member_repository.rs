use async_trait::async_trait;
use shared::{DomainError, DomainResult, PaginationParams};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::requests::{CreateMemberRequest, UpdateMemberRequest};
use crate::domain::entities::Member;
use crate::domain::repositories::MemberRepository;

pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn create(&self, request: CreateMemberRequest) -> DomainResult<Member> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (
                name, qualification, employment_type, max_night_shifts,
                min_night_shifts, night_shift_deduction_balance, capabilities
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, qualification, employment_type, max_night_shifts,
                      min_night_shifts, night_shift_deduction_balance, capabilities,
                      created_at, updated_at
            "#,
        )
        .bind(&request.name)
        .bind(&request.qualification)
        .bind(&request.employment_type)
        .bind(request.max_night_shifts)
        .bind(request.min_night_shifts)
        .bind(request.night_shift_deduction_balance)
        .bind(&request.capabilities)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(member)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, name, qualification, employment_type, max_night_shifts,
                   min_night_shifts, night_shift_deduction_balance, capabilities,
                   created_at, updated_at
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(member)
    }

    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Member>, u64)> {
        let offset = (params.page - 1) * params.page_size;

        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, name, qualification, employment_type, max_night_shifts,
                   min_night_shifts, night_shift_deduction_balance, capabilities,
                   created_at, updated_at
            FROM members
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.page_size as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok((members, total.0 as u64))
    }

    async fn list_all(&self) -> DomainResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, name, qualification, employment_type, max_night_shifts,
                   min_night_shifts, night_shift_deduction_balance, capabilities,
                   created_at, updated_at
            FROM members
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(members)
    }

    async fn update(&self, id: Uuid, request: UpdateMemberRequest) -> DomainResult<Member> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Member with id {} not found", id)))?;

        let member = sqlx::query_as::<_, Member>(
            r#"
            UPDATE members
            SET name = $1, qualification = $2, employment_type = $3, max_night_shifts = $4,
                min_night_shifts = $5, night_shift_deduction_balance = $6, capabilities = $7,
                updated_at = NOW()
            WHERE id = $8
            RETURNING id, name, qualification, employment_type, max_night_shifts,
                      min_night_shifts, night_shift_deduction_balance, capabilities,
                      created_at, updated_at
            "#,
        )
        .bind(request.name.unwrap_or(current.name))
        .bind(request.qualification.unwrap_or(current.qualification))
        .bind(request.employment_type.unwrap_or(current.employment_type))
        .bind(request.max_night_shifts.unwrap_or(current.max_night_shifts))
        .bind(request.min_night_shifts.unwrap_or(current.min_night_shifts))
        .bind(
            request
                .night_shift_deduction_balance
                .unwrap_or(current.night_shift_deduction_balance),
        )
        .bind(request.capabilities.unwrap_or(current.capabilities))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(member)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Member with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
