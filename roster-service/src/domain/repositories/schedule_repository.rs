use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DomainResult, ShiftType};
use uuid::Uuid;

use crate::domain::entities::{NewShiftAssignment, Schedule, ShiftAssignment};

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn find_by_year_month(&self, year_month: &str) -> DomainResult<Option<Schedule>>;

    /// Returns the existing schedule for `year_month`, creating one in
    /// `Draft` status if none exists yet. Generation always targets one
    /// schedule row per month (§6 "unique year-month key").
    async fn find_or_create(&self, year_month: &str) -> DomainResult<Schedule>;

    /// Cascade-deletes this schedule's prior assignments and inserts
    /// `assignments` in the same transaction (§10 "old rows never
    /// linger").
    async fn replace_assignments(
        &self,
        schedule_id: Uuid,
        assignments: Vec<NewShiftAssignment>,
    ) -> DomainResult<()>;

    async fn list_assignments(&self, schedule_id: Uuid) -> DomainResult<Vec<ShiftAssignment>>;

    /// Single-assignment edit (§11 PATCH endpoint). Upserts on
    /// `(schedule_id, member_id, date)`; the partial uniqueness index
    /// exempting `ward_free`/`outpatient_free` lives at the storage layer
    /// (§10), so this is a plain `ON CONFLICT` upsert from the Rust side.
    async fn upsert_assignment(
        &self,
        schedule_id: Uuid,
        member_id: Uuid,
        date: NaiveDate,
        shift_type: ShiftType,
        is_early: bool,
    ) -> DomainResult<ShiftAssignment>;
}
