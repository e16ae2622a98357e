//! Decision-variable space (§4.3): a boolean per (member, date, shift-type),
//! plus an `early` boolean per (early-capable member, date).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use selen::prelude::*;
use shared::ShiftType;
use uuid::Uuid;

/// Dense index into the member dimension. Member ids are remapped to
/// `0..N` for indexing (§9 "Variable tensor"); `VariableTensor` keeps the
/// reverse map so extraction re-emits the original member id.
pub type MemberIndex = usize;

fn shift_index(shift_type: ShiftType) -> usize {
    ShiftType::ALL
        .iter()
        .position(|s| *s == shift_type)
        .expect("ShiftType::ALL is exhaustive")
}

/// Owns the `x[m][d][s]` boolean tensor and the `early[m][d]` side table.
/// Built once per solve attempt; never mutated after construction.
pub struct VariableTensor {
    member_ids: Vec<Uuid>,
    dates: Vec<NaiveDate>,
    x: Vec<Vec<[VarId; ShiftType::ALL.len()]>>,
    /// Present only for members carrying `early_shift`; keyed by member
    /// index, one `VarId` per date. A `BTreeMap` (rather than a hash map)
    /// so `early_capable_members()` iterates in ascending member-index
    /// order, keeping H16/S4's constraint-posting order deterministic
    /// (§9 "Deterministic order").
    early: BTreeMap<MemberIndex, Vec<VarId>>,
}

impl VariableTensor {
    /// `early_capable` lists the member indices that should get an `early`
    /// boolean per date (§4.3: "every member that carries the
    /// `early_shift` capability").
    pub fn build(
        model: &mut Model,
        member_ids: &[Uuid],
        dates: &[NaiveDate],
        early_capable: &[MemberIndex],
    ) -> Self {
        let x: Vec<Vec<[VarId; ShiftType::ALL.len()]>> = (0..member_ids.len())
            .map(|_| {
                (0..dates.len())
                    .map(|_| std::array::from_fn(|_| model.bool()))
                    .collect()
            })
            .collect();

        let mut early = BTreeMap::new();
        for &m in early_capable {
            let vars: Vec<VarId> = (0..dates.len()).map(|_| model.bool()).collect();
            early.insert(m, vars);
        }

        Self {
            member_ids: member_ids.to_vec(),
            dates: dates.to_vec(),
            x,
            early,
        }
    }

    pub fn member_count(&self) -> usize {
        self.member_ids.len()
    }

    pub fn day_count(&self) -> usize {
        self.dates.len()
    }

    pub fn member_ids(&self) -> &[Uuid] {
        &self.member_ids
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn member_index(&self, id: Uuid) -> Option<MemberIndex> {
        self.member_ids.iter().position(|&m| m == id)
    }

    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        self.dates.iter().position(|&d| d == date)
    }

    /// `x[m][d][s]`.
    pub fn var(&self, m: MemberIndex, d: usize, shift_type: ShiftType) -> VarId {
        self.x[m][d][shift_index(shift_type)]
    }

    /// Every shift-type variable for (member, day), in `ShiftType::ALL`
    /// order — used by H1's exactly-one-per-day sum.
    pub fn all_shifts(&self, m: MemberIndex, d: usize) -> &[VarId; ShiftType::ALL.len()] {
        &self.x[m][d]
    }

    pub fn vars_for_shift_types(&self, m: MemberIndex, d: usize, shifts: &[ShiftType]) -> Vec<VarId> {
        shifts.iter().map(|&s| self.var(m, d, s)).collect()
    }

    /// `early[m][d]`, if `m` carries the `early_shift` capability.
    pub fn early(&self, m: MemberIndex, d: usize) -> Option<VarId> {
        self.early.get(&m).map(|vars| vars[d])
    }

    pub fn early_capable_members(&self) -> impl Iterator<Item = MemberIndex> + '_ {
        self.early.keys().copied()
    }
}
