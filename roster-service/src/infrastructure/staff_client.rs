//! HTTP collaborator client (§6): the roster generator's loader reaches
//! `staff-service` over `reqwest` for members, ng-pairs, and pediatric
//! dates instead of a direct `sqlx::Pool`, mirroring the teacher's
//! `scheduling-service -> data-service` split that used to live in
//! `infrastructure/http_client.rs`.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{CapabilityType, DomainError, EmploymentType, Qualification};
use uuid::Uuid;

use crate::domain::loader::{MemberRecord, NgPairRecord};

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct MemberDto {
    id: Uuid,
    name: String,
    qualification: Qualification,
    employment_type: EmploymentType,
    max_night_shifts: i32,
    min_night_shifts: i32,
    night_shift_deduction_balance: i32,
    capabilities: Vec<CapabilityType>,
}

impl From<MemberDto> for MemberRecord {
    fn from(dto: MemberDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            qualification: dto.qualification,
            employment_type: dto.employment_type,
            max_night_shifts: dto.max_night_shifts,
            min_night_shifts: dto.min_night_shifts,
            night_shift_deduction_balance: dto.night_shift_deduction_balance,
            capabilities: dto.capabilities.into_iter().collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NgPairDto {
    member_a_id: Uuid,
    member_b_id: Uuid,
}

impl From<NgPairDto> for NgPairRecord {
    fn from(dto: NgPairDto) -> Self {
        Self {
            member_a: dto.member_a_id,
            member_b: dto.member_b_id,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PediatricDateDto {
    date: NaiveDate,
}

/// The subset of `staff-service` the solver's loader depends on. A trait
/// so `HttpRosterInputLoader`'s tests can stub this with `wiremock`
/// instead of needing a live `staff-service`.
#[async_trait]
pub trait StaffServiceClient: Send + Sync {
    async fn list_members(&self) -> Result<Vec<MemberRecord>, DomainError>;
    async fn list_ng_pairs(&self) -> Result<Vec<NgPairRecord>, DomainError>;
    async fn list_pediatric_dates(&self, year_month: &str) -> Result<HashSet<NaiveDate>, DomainError>;
}

pub struct HttpStaffServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStaffServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_envelope<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, DomainError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?
            .error_for_status()
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        Ok(envelope.data)
    }
}

#[async_trait]
impl StaffServiceClient for HttpStaffServiceClient {
    async fn list_members(&self) -> Result<Vec<MemberRecord>, DomainError> {
        let members: Vec<MemberDto> = self.get_envelope("/api/v1/members/all").await?;
        Ok(members.into_iter().map(MemberRecord::from).collect())
    }

    async fn list_ng_pairs(&self) -> Result<Vec<NgPairRecord>, DomainError> {
        let pairs: Vec<NgPairDto> = self.get_envelope("/api/v1/ng-pairs").await?;
        Ok(pairs.into_iter().map(NgPairRecord::from).collect())
    }

    async fn list_pediatric_dates(&self, year_month: &str) -> Result<HashSet<NaiveDate>, DomainError> {
        let path = format!("/api/v1/pediatric-dates?year_month={year_month}");
        let dates: Vec<PediatricDateDto> = self.get_envelope(&path).await?;
        Ok(dates.into_iter().map(|d| d.date).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn list_members_unwraps_the_data_envelope() {
        let server = MockServer::start().await;
        let member_id = Uuid::new_v4();
        Mock::given(method("GET"))
            .and(path("/api/v1/members/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "ok",
                "data": [{
                    "id": member_id,
                    "name": "Alice",
                    "qualification": "nurse",
                    "employment_type": "full_time",
                    "max_night_shifts": 5,
                    "min_night_shifts": 1,
                    "night_shift_deduction_balance": 0,
                    "capabilities": ["day_shift", "night_shift"],
                }],
            })))
            .mount(&server)
            .await;

        let client = HttpStaffServiceClient::new(server.uri());
        let members = client.list_members().await.unwrap();

        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, member_id);
        assert!(members[0].capabilities.contains(&CapabilityType::NightShift));
    }

    #[tokio::test]
    async fn non_2xx_status_surfaces_as_external_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/ng-pairs"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = HttpStaffServiceClient::new(server.uri());
        let result = client.list_ng_pairs().await;

        assert!(matches!(result, Err(DomainError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn list_pediatric_dates_passes_year_month_as_query_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/pediatric-dates"))
            .and(wiremock::matchers::query_param("year_month", "2025-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "ok",
                "data": [{ "date": "2025-01-10" }],
            })))
            .mount(&server)
            .await;

        let client = HttpStaffServiceClient::new(server.uri());
        let dates = client.list_pediatric_dates("2025-01").await.unwrap();

        assert_eq!(dates.len(), 1);
        assert!(dates.contains(&NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
    }
}
