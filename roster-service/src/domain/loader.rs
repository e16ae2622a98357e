//! Narrow loader boundary (§6): the solver core reads members, ng-pairs,
//! requests, and pediatric-doctor dates through this trait only, never via
//! direct SQL. Keeps `RosterGenerator` storage-agnostic and unit testable.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{CapabilityType, DomainError, EmploymentType, Qualification, RequestType};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct MemberRecord {
    pub id: Uuid,
    pub name: String,
    pub qualification: Qualification,
    pub employment_type: EmploymentType,
    pub max_night_shifts: i32,
    pub min_night_shifts: i32,
    pub night_shift_deduction_balance: i32,
    pub capabilities: HashSet<CapabilityType>,
}

#[derive(Debug, Clone, Copy)]
pub struct NgPairRecord {
    pub member_a: Uuid,
    pub member_b: Uuid,
}

#[derive(Debug, Clone, Copy)]
pub struct RequestRecord {
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub request_type: RequestType,
}

#[async_trait]
pub trait RosterInputLoader: Send + Sync {
    async fn load_members(&self) -> Result<Vec<MemberRecord>, DomainError>;
    async fn load_ng_pairs(&self) -> Result<Vec<NgPairRecord>, DomainError>;
    async fn load_requests(&self, year_month: &str) -> Result<Vec<RequestRecord>, DomainError>;
    async fn load_pediatric_dates(&self, year_month: &str) -> Result<HashSet<NaiveDate>, DomainError>;
}

/// Production loader (§SPEC_FULL module 6): members/ng-pairs/pediatric
/// dates come from `staff-service` over HTTP; requests are read straight
/// from `roster-service`'s own Postgres-backed `ShiftRequestRepository`,
/// since those two concerns are owned by different schemas.
pub struct HttpRosterInputLoader {
    staff_client: std::sync::Arc<dyn crate::infrastructure::staff_client::StaffServiceClient>,
    shift_request_repo: std::sync::Arc<dyn crate::domain::repositories::ShiftRequestRepository>,
}

impl HttpRosterInputLoader {
    pub fn new(
        staff_client: std::sync::Arc<dyn crate::infrastructure::staff_client::StaffServiceClient>,
        shift_request_repo: std::sync::Arc<dyn crate::domain::repositories::ShiftRequestRepository>,
    ) -> Self {
        Self {
            staff_client,
            shift_request_repo,
        }
    }
}

#[async_trait]
impl RosterInputLoader for HttpRosterInputLoader {
    async fn load_members(&self) -> Result<Vec<MemberRecord>, DomainError> {
        self.staff_client.list_members().await
    }

    async fn load_ng_pairs(&self) -> Result<Vec<NgPairRecord>, DomainError> {
        self.staff_client.list_ng_pairs().await
    }

    async fn load_requests(&self, year_month: &str) -> Result<Vec<RequestRecord>, DomainError> {
        let requests = self.shift_request_repo.list_by_year_month(year_month).await?;
        Ok(requests
            .into_iter()
            .map(|r| RequestRecord {
                member_id: r.member_id,
                date: r.date,
                request_type: r.request_type,
            })
            .collect())
    }

    async fn load_pediatric_dates(&self, year_month: &str) -> Result<HashSet<NaiveDate>, DomainError> {
        self.staff_client.list_pediatric_dates(year_month).await
    }
}

/// In-memory loader backing unit/integration tests and the seed scenarios
/// S-A..S-F (spec.md §8). Requests and pediatric dates are filtered to the
/// requested `year_month` the way a real SQL `WHERE` clause would.
#[derive(Debug, Clone, Default)]
pub struct FixtureRosterInputLoader {
    pub members: Vec<MemberRecord>,
    pub ng_pairs: Vec<NgPairRecord>,
    pub requests: Vec<RequestRecord>,
    pub pediatric_dates: HashSet<NaiveDate>,
}

impl FixtureRosterInputLoader {
    pub fn new(members: Vec<MemberRecord>) -> Self {
        Self {
            members,
            ng_pairs: Vec::new(),
            requests: Vec::new(),
            pediatric_dates: HashSet::new(),
        }
    }

    pub fn with_ng_pairs(mut self, ng_pairs: Vec<NgPairRecord>) -> Self {
        self.ng_pairs = ng_pairs;
        self
    }

    pub fn with_requests(mut self, requests: Vec<RequestRecord>) -> Self {
        self.requests = requests;
        self
    }

    pub fn with_pediatric_dates(mut self, dates: HashSet<NaiveDate>) -> Self {
        self.pediatric_dates = dates;
        self
    }
}

#[async_trait]
impl RosterInputLoader for FixtureRosterInputLoader {
    async fn load_members(&self) -> Result<Vec<MemberRecord>, DomainError> {
        Ok(self.members.clone())
    }

    async fn load_ng_pairs(&self) -> Result<Vec<NgPairRecord>, DomainError> {
        Ok(self.ng_pairs.clone())
    }

    async fn load_requests(&self, year_month: &str) -> Result<Vec<RequestRecord>, DomainError> {
        Ok(self
            .requests
            .iter()
            .filter(|r| in_year_month(r.date, year_month))
            .copied()
            .collect())
    }

    async fn load_pediatric_dates(&self, year_month: &str) -> Result<HashSet<NaiveDate>, DomainError> {
        Ok(self
            .pediatric_dates
            .iter()
            .filter(|d| in_year_month(**d, year_month))
            .copied()
            .collect())
    }
}

fn in_year_month(date: NaiveDate, year_month: &str) -> bool {
    use chrono::Datelike;
    let formatted = format!("{:04}-{:02}", date.year(), date.month());
    formatted == year_month
}
