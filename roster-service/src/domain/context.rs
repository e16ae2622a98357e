//! Resolved, index-addressable view over a month's loaded inputs.
//!
//! `SolveContext` is what constraint builders and the generator actually
//! iterate over: dense member indices, a dense date axis, and requests/
//! ng-pairs/pediatric flags translated into those indices once up front.
//! Built once per solve attempt from a `GenerationContext`; never mutated.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use shared::{CapabilityType, DomainError, EmploymentType, Qualification, RequestType};
use uuid::Uuid;

use crate::domain::calendar::{self, DayType};
use crate::domain::loader::{MemberRecord, NgPairRecord, RequestRecord};
use crate::domain::variables::MemberIndex;

/// A member's loaded attributes plus its derived off-day quota (§4.7).
#[derive(Debug, Clone)]
pub struct MemberCtx {
    pub id: Uuid,
    pub name: String,
    pub qualification: Qualification,
    pub employment_type: EmploymentType,
    pub max_night_shifts: i32,
    pub min_night_shifts: i32,
    pub night_shift_deduction_balance: i32,
    pub capabilities: HashSet<CapabilityType>,
    pub required_off: i32,
}

impl MemberCtx {
    pub fn has(&self, capability: CapabilityType) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn is_part_time(&self) -> bool {
        matches!(self.employment_type, EmploymentType::PartTime)
    }
}

pub struct SolveContext {
    pub year_month: String,
    pub dates: Vec<NaiveDate>,
    pub day_types: Vec<DayType>,
    /// Indexed by day index; true on pediatric-doctor days (§3).
    pub pediatric: Vec<bool>,
    /// Dense, ordered ascending by member id (§9 "Deterministic order").
    pub members: Vec<MemberCtx>,
    pub ng_pairs: Vec<(MemberIndex, MemberIndex)>,
    /// `(member_index, day_index, request_type)`.
    pub requests: Vec<(MemberIndex, usize, RequestType)>,
}

/// §4.7 off-day quota derivation.
fn required_off_for(
    member: &MemberRecord,
    base: i32,
    days_in_month: usize,
) -> i32 {
    if matches!(member.employment_type, EmploymentType::PartTime) {
        days_in_month as i32 - member.max_night_shifts
    } else if member.night_shift_deduction_balance + member.max_night_shifts >= 8 {
        base - 1
    } else {
        base
    }
}

impl SolveContext {
    pub fn build(
        year_month: &str,
        members: &[MemberRecord],
        ng_pairs: &[NgPairRecord],
        requests: &[RequestRecord],
        pediatric_dates: &HashSet<NaiveDate>,
    ) -> Result<Self, DomainError> {
        let dates = calendar::month_dates(year_month)?;
        let day_types: Vec<DayType> = dates.iter().map(|&d| calendar::day_type(d)).collect();
        let pediatric: Vec<bool> = dates.iter().map(|d| pediatric_dates.contains(d)).collect();

        let base = calendar::base_off_days(dates.len());

        let mut ordered: Vec<&MemberRecord> = members.iter().collect();
        ordered.sort_by_key(|m| m.id);

        let members_ctx: Vec<MemberCtx> = ordered
            .iter()
            .map(|m| MemberCtx {
                id: m.id,
                name: m.name.clone(),
                qualification: m.qualification,
                employment_type: m.employment_type,
                max_night_shifts: m.max_night_shifts,
                min_night_shifts: m.min_night_shifts,
                night_shift_deduction_balance: m.night_shift_deduction_balance,
                capabilities: m.capabilities.clone(),
                required_off: required_off_for(m, base, dates.len()),
            })
            .collect();

        let index_of: HashMap<Uuid, MemberIndex> = members_ctx
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id, i))
            .collect();
        let date_index_of: HashMap<NaiveDate, usize> =
            dates.iter().enumerate().map(|(i, &d)| (d, i)).collect();

        let mut ng_pairs_idx = Vec::with_capacity(ng_pairs.len());
        for pair in ng_pairs {
            let (Some(&a), Some(&b)) = (index_of.get(&pair.member_a), index_of.get(&pair.member_b))
            else {
                continue;
            };
            ng_pairs_idx.push((a, b));
        }

        let mut requests_idx = Vec::with_capacity(requests.len());
        for req in requests {
            let (Some(&m), Some(&d)) =
                (index_of.get(&req.member_id), date_index_of.get(&req.date))
            else {
                continue;
            };
            requests_idx.push((m, d, req.request_type));
        }

        Ok(Self {
            year_month: year_month.to_string(),
            dates,
            day_types,
            pediatric,
            members: members_ctx,
            ng_pairs: ng_pairs_idx,
            requests: requests_idx,
        })
    }

    pub fn day_count(&self) -> usize {
        self.dates.len()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn member_ids(&self) -> Vec<Uuid> {
        self.members.iter().map(|m| m.id).collect()
    }

    pub fn member_index(&self, id: Uuid) -> Option<MemberIndex> {
        self.members.iter().position(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::EmploymentType;

    fn member(id: Uuid, employment: EmploymentType, max_nights: i32, balance: i32) -> MemberRecord {
        MemberRecord {
            id,
            name: "test".into(),
            qualification: Qualification::Nurse,
            employment_type: employment,
            max_night_shifts: max_nights,
            min_night_shifts: 0,
            night_shift_deduction_balance: balance,
            capabilities: HashSet::new(),
        }
    }

    #[test]
    fn part_time_required_off_is_days_minus_night_allotment() {
        let m = member(Uuid::new_v4(), EmploymentType::PartTime, 4, 0);
        assert_eq!(required_off_for(&m, 10, 31), 27);
    }

    #[test]
    fn full_time_gets_base_unless_balance_plus_max_crosses_eight() {
        let low = member(Uuid::new_v4(), EmploymentType::FullTime, 5, 0);
        assert_eq!(required_off_for(&low, 10, 31), 10);

        let high = member(Uuid::new_v4(), EmploymentType::FullTime, 5, 5);
        assert_eq!(required_off_for(&high, 10, 31), 9);
    }

    #[test]
    fn context_orders_members_ascending_by_id_and_maps_requests() {
        let a = Uuid::from_u128(2);
        let b = Uuid::from_u128(1);
        let members = vec![
            member(a, EmploymentType::FullTime, 5, 0),
            member(b, EmploymentType::FullTime, 5, 0),
        ];
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let requests = vec![RequestRecord {
            member_id: b,
            date,
            request_type: RequestType::DayOff,
        }];
        let ctx = SolveContext::build("2025-01", &members, &[], &requests, &HashSet::new()).unwrap();

        assert_eq!(ctx.members[0].id, b);
        assert_eq!(ctx.members[1].id, a);
        assert_eq!(ctx.requests, vec![(0, 14, RequestType::DayOff)]);
    }
}
