use async_trait::async_trait;
use chrono::Utc;
use shared::{CapabilityType, DomainError, DomainResult, PaginationParams};
use staff_service::api::requests::{
    CreateMemberRequest, CreateNgPairRequest, CreatePediatricDateRequest,
    CreateShiftRequestRequest, UpdateMemberRequest, UpdateShiftRequestRequest,
};
use staff_service::api::AppState;
use staff_service::domain::entities::{Member, NgPair, PediatricDate, ShiftRequest};
use staff_service::domain::repositories::{
    MemberRepository, NgPairRepository, PediatricDateRepository, ShiftRequestRepository,
};
use staff_service::infrastructure::redis::RedisPool;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

#[derive(Default)]
pub struct MockMemberRepository {
    members: RwLock<HashMap<Uuid, Member>>,
}

impl MockMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<Member>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.members.write().unwrap();
            for m in members {
                map.insert(m.id, m);
            }
        }
        repo
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn create(&self, request: CreateMemberRequest) -> DomainResult<Member> {
        let now = Utc::now();
        let member = Member {
            id: Uuid::new_v4(),
            name: request.name,
            qualification: request.qualification,
            employment_type: request.employment_type,
            max_night_shifts: request.max_night_shifts,
            min_night_shifts: request.min_night_shifts,
            night_shift_deduction_balance: request.night_shift_deduction_balance,
            capabilities: request.capabilities,
            created_at: now,
            updated_at: now,
        };
        self.members
            .write()
            .unwrap()
            .insert(member.id, member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Member>> {
        Ok(self.members.read().unwrap().get(&id).cloned())
    }

    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Member>, u64)> {
        let members = self.members.read().unwrap();
        let all: Vec<Member> = members.values().cloned().collect();
        let total = all.len() as u64;
        let offset = (params.page - 1) * params.page_size;
        let paginated: Vec<Member> = all
            .into_iter()
            .skip(offset as usize)
            .take(params.page_size as usize)
            .collect();
        Ok((paginated, total))
    }

    async fn list_all(&self) -> DomainResult<Vec<Member>> {
        Ok(self.members.read().unwrap().values().cloned().collect())
    }

    async fn update(&self, id: Uuid, request: UpdateMemberRequest) -> DomainResult<Member> {
        let mut members = self.members.write().unwrap();
        let member = members
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Member with id {} not found", id)))?;

        if let Some(name) = request.name {
            member.name = name;
        }
        if let Some(qualification) = request.qualification {
            member.qualification = qualification;
        }
        if let Some(employment_type) = request.employment_type {
            member.employment_type = employment_type;
        }
        if let Some(max) = request.max_night_shifts {
            member.max_night_shifts = max;
        }
        if let Some(min) = request.min_night_shifts {
            member.min_night_shifts = min;
        }
        if let Some(balance) = request.night_shift_deduction_balance {
            member.night_shift_deduction_balance = balance;
        }
        if let Some(capabilities) = request.capabilities {
            member.capabilities = capabilities;
        }
        member.updated_at = Utc::now();

        Ok(member.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.members
            .write()
            .unwrap()
            .remove(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Member with id {} not found", id)))?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MockNgPairRepository {
    pairs: RwLock<HashMap<Uuid, NgPair>>,
}

impl MockNgPairRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NgPairRepository for MockNgPairRepository {
    async fn create(&self, request: CreateNgPairRequest) -> DomainResult<NgPair> {
        let (a, b) = NgPair::normalize(request.member_a_id, request.member_b_id);
        let pair = NgPair {
            id: Uuid::new_v4(),
            member_a_id: a,
            member_b_id: b,
            created_at: Utc::now(),
        };
        self.pairs.write().unwrap().insert(pair.id, pair.clone());
        Ok(pair)
    }

    async fn list_all(&self) -> DomainResult<Vec<NgPair>> {
        Ok(self.pairs.read().unwrap().values().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.pairs
            .write()
            .unwrap()
            .remove(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Ng-pair with id {} not found", id)))?;
        Ok(())
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
    async fn create(&self, request: CreateShiftRequestRequest) -> DomainResult<ShiftRequest> {
        let exists = self
            .requests
            .read()
            .unwrap()
            .values()
            .any(|r| r.member_id == request.member_id && r.date == request.date);
        if exists {
            return Err(DomainError::Conflict(format!(
                "a shift request already exists for member {} on {}",
                request.member_id, request.date
            )));
        }

        let shift_request = ShiftRequest {
            id: Uuid::new_v4(),
            member_id: request.member_id,
            date: request.date,
            request_type: request.request_type,
            created_at: Utc::now(),
        };
        self.requests
            .write()
            .unwrap()
            .insert(shift_request.id, shift_request.clone());
        Ok(shift_request)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ShiftRequest>> {
        Ok(self.requests.read().unwrap().get(&id).cloned())
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

    async fn update(
        &self,
        id: Uuid,
        request: UpdateShiftRequestRequest,
    ) -> DomainResult<ShiftRequest> {
        let mut requests = self.requests.write().unwrap();
        let shift_request = requests.get_mut(&id).ok_or_else(|| {
            DomainError::NotFound(format!("Shift request with id {} not found", id))
        })?;

        if let Some(request_type) = request.request_type {
            shift_request.request_type = request_type;
        }

        Ok(shift_request.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.requests.write().unwrap().remove(&id).ok_or_else(|| {
            DomainError::NotFound(format!("Shift request with id {} not found", id))
        })?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MockPediatricDateRepository {
    dates: RwLock<HashMap<Uuid, PediatricDate>>,
}

impl MockPediatricDateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PediatricDateRepository for MockPediatricDateRepository {
    async fn create(&self, request: CreatePediatricDateRequest) -> DomainResult<PediatricDate> {
        let entry = PediatricDate {
            id: Uuid::new_v4(),
            date: request.date,
            created_at: Utc::now(),
        };
        self.dates.write().unwrap().insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn list_by_year_month(&self, year_month: &str) -> DomainResult<Vec<PediatricDate>> {
        Ok(self
            .dates
            .read()
            .unwrap()
            .values()
            .filter(|d| d.date.format("%Y-%m").to_string() == year_month)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.dates
            .write()
            .unwrap()
            .remove(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Pediatric date with id {} not found", id)))?;
        Ok(())
    }
}

/// Mock Redis Pool for testing (no-op implementation)
pub async fn create_mock_redis_pool() -> RedisPool {
    let client = redis::Client::open("redis://localhost:6379").unwrap();
    redis::aio::ConnectionManager::new(client).await.unwrap()
}

pub fn create_test_app_state(
    member_repo: Arc<dyn MemberRepository>,
    ng_pair_repo: Arc<dyn NgPairRepository>,
    shift_request_repo: Arc<dyn ShiftRequestRepository>,
    pediatric_date_repo: Arc<dyn PediatricDateRepository>,
    redis_pool: RedisPool,
) -> AppState {
    AppState::new(
        member_repo,
        ng_pair_repo,
        shift_request_repo,
        pediatric_date_repo,
        redis_pool,
    )
}

pub fn create_sample_member(id: Uuid, name: &str) -> Member {
    let now = Utc::now();
    Member {
        id,
        name: name.to_string(),
        qualification: shared::Qualification::Nurse,
        employment_type: shared::EmploymentType::FullTime,
        max_night_shifts: 5,
        min_night_shifts: 0,
        night_shift_deduction_balance: 0,
        capabilities: vec![CapabilityType::DayShift, CapabilityType::NightShift],
        created_at: now,
        updated_at: now,
    }
}
