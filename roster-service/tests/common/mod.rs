use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use roster_service::api::AppState;
use roster_service::domain::entities::{NewShiftAssignment, Schedule, ShiftAssignment, ShiftRequest};
use roster_service::domain::loader::{MemberRecord, NgPairRecord};
use roster_service::domain::repositories::{ScheduleRepository, ShiftRequestRepository};
use roster_service::infrastructure::staff_client::StaffServiceClient;
use shared::{CapabilityType, DomainError, DomainResult, EmploymentType, Qualification, RequestType, ScheduleStatus, ShiftType};
use uuid::Uuid;

#[derive(Default)]
pub struct MockScheduleRepository {
    schedules: RwLock<HashMap<String, Schedule>>,
    assignments: RwLock<HashMap<Uuid, Vec<ShiftAssignment>>>,
}

impl MockScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleRepository for MockScheduleRepository {
    async fn find_by_year_month(&self, year_month: &str) -> DomainResult<Option<Schedule>> {
        Ok(self.schedules.read().unwrap().get(year_month).cloned())
    }

    async fn find_or_create(&self, year_month: &str) -> DomainResult<Schedule> {
        let mut schedules = self.schedules.write().unwrap();
        if let Some(existing) = schedules.get(year_month) {
            return Ok(existing.clone());
        }
        let now = Utc::now();
        let schedule = Schedule {
            id: Uuid::new_v4(),
            year_month: year_month.to_string(),
            status: ScheduleStatus::Draft,
            created_at: now,
            updated_at: now,
        };
        schedules.insert(year_month.to_string(), schedule.clone());
        Ok(schedule)
    }

    async fn replace_assignments(
        &self,
        schedule_id: Uuid,
        assignments: Vec<NewShiftAssignment>,
    ) -> DomainResult<()> {
        let now = Utc::now();
        let rows: Vec<ShiftAssignment> = assignments
            .into_iter()
            .map(|a| ShiftAssignment {
                id: Uuid::new_v4(),
                schedule_id,
                member_id: a.member_id,
                date: a.date,
                shift_type: a.shift_type,
                is_early: a.is_early,
                created_at: now,
                updated_at: now,
            })
            .collect();
        self.assignments.write().unwrap().insert(schedule_id, rows);

        let mut schedules = self.schedules.write().unwrap();
        if let Some(schedule) = schedules.values_mut().find(|s| s.id == schedule_id) {
            schedule.status = ScheduleStatus::Published;
            schedule.updated_at = now;
        }
        Ok(())
    }

    async fn list_assignments(&self, schedule_id: Uuid) -> DomainResult<Vec<ShiftAssignment>> {
        Ok(self
            .assignments
            .read()
            .unwrap()
            .get(&schedule_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn upsert_assignment(
        &self,
        schedule_id: Uuid,
        member_id: Uuid,
        date: NaiveDate,
        shift_type: ShiftType,
        is_early: bool,
    ) -> DomainResult<ShiftAssignment> {
        let mut assignments = self.assignments.write().unwrap();
        let rows = assignments.entry(schedule_id).or_default();

        if !shift_type.is_multi_assignable() {
            rows.retain(|a| !(a.member_id == member_id && a.date == date && !a.shift_type.is_multi_assignable()));
        }

        let now = Utc::now();
        let row = ShiftAssignment {
            id: Uuid::new_v4(),
            schedule_id,
            member_id,
            date,
            shift_type,
            is_early,
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        Ok(row)
    }
}

#[derive(Default)]
pub struct MockShiftRequestRepository {
    requests: RwLock<HashMap<Uuid, ShiftRequest>>,
}

impl MockShiftRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShiftRequestRepository for MockShiftRequestRepository {
    async fn create(
        &self,
        member_id: Uuid,
        date: NaiveDate,
        request_type: RequestType,
    ) -> DomainResult<ShiftRequest> {
        let exists = self
            .requests
            .read()
            .unwrap()
            .values()
            .any(|r| r.member_id == member_id && r.date == date);
        if exists {
            return Err(DomainError::Conflict(format!(
                "a shift request already exists for member {member_id} on {date}"
            )));
        }

        let now = Utc::now();
        let request = ShiftRequest {
            id: Uuid::new_v4(),
            member_id,
            date,
            request_type,
            created_at: now,
            updated_at: now,
        };
        self.requests.write().unwrap().insert(request.id, request.clone());
        Ok(request)
    }

    async fn list_by_year_month(&self, year_month: &str) -> DomainResult<Vec<ShiftRequest>> {
        Ok(self
            .requests
            .read()
            .unwrap()
            .values()
            .filter(|r| r.date.format("%Y-%m").to_string() == year_month)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MockStaffServiceClient {
    pub members: Vec<MemberRecord>,
    pub ng_pairs: Vec<NgPairRecord>,
    pub pediatric_dates: HashSet<NaiveDate>,
}

impl MockStaffServiceClient {
    pub fn with_members(members: Vec<MemberRecord>) -> Self {
        Self {
            members,
            ..Self::default()
        }
    }
}

#[async_trait]
impl StaffServiceClient for MockStaffServiceClient {
    async fn list_members(&self) -> Result<Vec<MemberRecord>, DomainError> {
        Ok(self.members.clone())
    }

    async fn list_ng_pairs(&self) -> Result<Vec<NgPairRecord>, DomainError> {
        Ok(self.ng_pairs.clone())
    }

    async fn list_pediatric_dates(&self, _year_month: &str) -> Result<HashSet<NaiveDate>, DomainError> {
        Ok(self.pediatric_dates.clone())
    }
}

pub fn create_test_app_state(
    schedule_repo: Arc<dyn ScheduleRepository>,
    shift_request_repo: Arc<dyn ShiftRequestRepository>,
    staff_client: Arc<dyn StaffServiceClient>,
) -> AppState {
    AppState::new(schedule_repo, shift_request_repo, staff_client)
}

pub fn create_sample_member(id: Uuid, name: &str) -> MemberRecord {
    MemberRecord {
        id,
        name: name.to_string(),
        qualification: Qualification::Nurse,
        employment_type: EmploymentType::FullTime,
        max_night_shifts: 5,
        min_night_shifts: 0,
        night_shift_deduction_balance: 0,
        capabilities: [CapabilityType::DayShift, CapabilityType::NightShift]
            .into_iter()
            .collect(),
    }
}
