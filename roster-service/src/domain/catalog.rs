//! Static staffing catalog (§4.2): per-shift min/max staffing by day-type,
//! required capabilities/qualification, and ward-family membership.

use std::sync::OnceLock;

use shared::{CapabilityType, Qualification, ShiftType};

use crate::domain::calendar::DayType;

#[derive(Debug, Clone)]
pub struct StaffingRequirement {
    pub shift_type: ShiftType,
    /// Indexed by `DayType` (weekday, saturday, sunday_holiday).
    pub min_staff: [u32; 3],
    pub max_staff: [u32; 3],
    pub required_capabilities: &'static [CapabilityType],
    pub required_qualification: Option<Qualification>,
    pub is_ward_family: bool,
}

fn day_index(day_type: DayType) -> usize {
    match day_type {
        DayType::Weekday => 0,
        DayType::Saturday => 1,
        DayType::SundayHoliday => 2,
    }
}

/// §4.2's 12-entry table. `night_leader`/`night` are included even though
/// they are not part of `DAY_SHIFT_TYPES` — the catalog covers every
/// shift type that carries a staffing demand, day or night.
pub fn staffing_requirements() -> &'static [StaffingRequirement] {
    static REQUIREMENTS: OnceLock<Vec<StaffingRequirement>> = OnceLock::new();
    REQUIREMENTS.get_or_init(|| {
        vec![
            StaffingRequirement {
                shift_type: ShiftType::OutpatientLeader,
                min_staff: [1, 1, 0],
                max_staff: [1, 1, 0],
                required_capabilities: &[CapabilityType::OutpatientLeader],
                required_qualification: None,
                is_ward_family: false,
            },
            StaffingRequirement {
                shift_type: ShiftType::TreatmentRoom,
                min_staff: [1, 1, 0],
                max_staff: [5, 5, 0],
                required_capabilities: &[],
                required_qualification: None,
                is_ward_family: false,
            },
            StaffingRequirement {
                shift_type: ShiftType::Beauty,
                min_staff: [1, 1, 0],
                max_staff: [1, 1, 0],
                required_capabilities: &[CapabilityType::Beauty],
                required_qualification: None,
                is_ward_family: false,
            },
            StaffingRequirement {
                shift_type: ShiftType::MwOutpatient,
                min_staff: [1, 1, 0],
                max_staff: [2, 2, 0],
                required_capabilities: &[CapabilityType::MwOutpatient],
                required_qualification: None,
                is_ward_family: false,
            },
            StaffingRequirement {
                shift_type: ShiftType::WardLeader,
                min_staff: [1, 1, 1],
                max_staff: [1, 1, 1],
                required_capabilities: &[CapabilityType::WardLeader, CapabilityType::WardStaff],
                required_qualification: None,
                is_ward_family: true,
            },
            StaffingRequirement {
                shift_type: ShiftType::Ward,
                min_staff: [1, 1, 1],
                max_staff: [5, 5, 3],
                required_capabilities: &[CapabilityType::WardStaff],
                required_qualification: None,
                is_ward_family: true,
            },
            StaffingRequirement {
                shift_type: ShiftType::Delivery,
                min_staff: [1, 0, 0],
                max_staff: [1, 1, 1],
                required_capabilities: &[CapabilityType::WardStaff],
                required_qualification: Some(Qualification::Midwife),
                is_ward_family: true,
            },
            StaffingRequirement {
                shift_type: ShiftType::DeliveryCharge,
                min_staff: [1, 1, 1],
                max_staff: [1, 1, 1],
                required_capabilities: &[CapabilityType::WardStaff],
                required_qualification: Some(Qualification::Midwife),
                is_ward_family: true,
            },
            StaffingRequirement {
                shift_type: ShiftType::NightLeader,
                min_staff: [1, 1, 1],
                max_staff: [1, 1, 1],
                required_capabilities: &[CapabilityType::NightLeader],
                required_qualification: None,
                is_ward_family: false,
            },
            StaffingRequirement {
                shift_type: ShiftType::Night,
                min_staff: [1, 1, 1],
                max_staff: [1, 1, 1],
                required_capabilities: &[CapabilityType::NightShift],
                required_qualification: None,
                is_ward_family: false,
            },
        ]
    })
}

pub fn requirement_for(shift_type: ShiftType) -> Option<&'static StaffingRequirement> {
    staffing_requirements()
        .iter()
        .find(|r| r.shift_type == shift_type)
}

pub fn min_max_for(shift_type: ShiftType, day_type: DayType) -> (u32, u32) {
    let idx = day_index(day_type);
    requirement_for(shift_type)
        .map(|r| (r.min_staff[idx], r.max_staff[idx]))
        .unwrap_or((0, 0))
}
