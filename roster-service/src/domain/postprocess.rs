//! Post-processing utilities available to editors but never invoked from
//! `RosterGenerator::generate` (spec.md §9 "Open question: post-processing").
//! Grounded in `original_source/backend/solver/postprocess.py`'s
//! `fill_treatment_room`.

use chrono::NaiveDate;
use shared::{CapabilityType, ShiftType};
use uuid::Uuid;

use crate::domain::calendar::{self, DayType};

/// One generated or edited assignment, as persisted.
#[derive(Debug, Clone)]
pub struct AssignmentRecord {
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub shift_type: ShiftType,
}

/// A member eligible for the treatment-room fill pass.
#[derive(Debug, Clone)]
pub struct TreatmentRoomCandidate {
    pub member_id: Uuid,
    pub capabilities: Vec<CapabilityType>,
}

/// Fills every day-shift-capable member who is unassigned (no day entry at
/// all, which never happens from the generator but can happen after
/// manual deletions) into `treatment_room` on non-sunday/holiday days,
/// skipping members already on `day_off`/`paid_leave` or with any other
/// assignment that day. Returns the new assignments to append; never
/// touches existing ones.
pub fn fill_treatment_room(
    dates: &[NaiveDate],
    candidates: &[TreatmentRoomCandidate],
    existing: &[AssignmentRecord],
) -> Vec<AssignmentRecord> {
    let mut filled = Vec::new();

    for &date in dates {
        if calendar::day_type(date) == DayType::SundayHoliday {
            continue;
        }

        for candidate in candidates {
            if !candidate.capabilities.contains(&CapabilityType::DayShift) {
                continue;
            }

            let already_assigned = existing
                .iter()
                .any(|a| a.member_id == candidate.member_id && a.date == date);
            if already_assigned {
                continue;
            }

            filled.push(AssignmentRecord {
                member_id: candidate.member_id,
                date,
                shift_type: ShiftType::TreatmentRoom,
            });
        }
    }

    filled
}
