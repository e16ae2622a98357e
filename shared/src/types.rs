use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Licensure tier. Gates delivery-related shifts (H3).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "qualification", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Qualification {
    Nurse,
    AssociateNurse,
    Midwife,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "employment_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
}

/// A skill tag a member carries enabling certain shift types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "capability_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CapabilityType {
    OutpatientLeader,
    WardLeader,
    NightLeader,
    DayShift,
    NightShift,
    Beauty,
    MwOutpatient,
    WardStaff,
    Rookie,
    EarlyShift,
}

/// All 14 shift types a member may be assigned to on a given day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "shift_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    OutpatientLeader,
    TreatmentRoom,
    Beauty,
    MwOutpatient,
    WardLeader,
    Ward,
    Delivery,
    DeliveryCharge,
    WardFree,
    OutpatientFree,
    NightLeader,
    Night,
    DayOff,
    PaidLeave,
}

impl ShiftType {
    /// Every shift type, in the fixed declaration order used for
    /// deterministic model construction.
    pub const ALL: [ShiftType; 14] = [
        ShiftType::OutpatientLeader,
        ShiftType::TreatmentRoom,
        ShiftType::Beauty,
        ShiftType::MwOutpatient,
        ShiftType::WardLeader,
        ShiftType::Ward,
        ShiftType::Delivery,
        ShiftType::DeliveryCharge,
        ShiftType::WardFree,
        ShiftType::OutpatientFree,
        ShiftType::NightLeader,
        ShiftType::Night,
        ShiftType::DayOff,
        ShiftType::PaidLeave,
    ];

    pub const DAY_SHIFT_TYPES: [ShiftType; 8] = [
        ShiftType::OutpatientLeader,
        ShiftType::TreatmentRoom,
        ShiftType::Beauty,
        ShiftType::MwOutpatient,
        ShiftType::WardLeader,
        ShiftType::Ward,
        ShiftType::Delivery,
        ShiftType::DeliveryCharge,
    ];

    pub const NIGHT_SHIFT_TYPES: [ShiftType; 2] = [ShiftType::NightLeader, ShiftType::Night];

    pub const WARD_SHIFT_TYPES: [ShiftType; 4] = [
        ShiftType::WardLeader,
        ShiftType::Ward,
        ShiftType::Delivery,
        ShiftType::DeliveryCharge,
    ];

    pub const OFF_DAY_TYPES: [ShiftType; 2] = [ShiftType::DayOff, ShiftType::PaidLeave];

    /// `ward_free` and `outpatient_free` carry no solver-side demand and may
    /// hold more than one member on the same date — they exist only so a
    /// human editor can over-allocate after the fact.
    pub const MULTI_ASSIGNABLE: [ShiftType; 2] = [ShiftType::WardFree, ShiftType::OutpatientFree];

    pub fn is_day_shift(self) -> bool {
        Self::DAY_SHIFT_TYPES.contains(&self)
    }

    pub fn is_night_shift(self) -> bool {
        Self::NIGHT_SHIFT_TYPES.contains(&self)
    }

    pub fn is_ward_family(self) -> bool {
        Self::WARD_SHIFT_TYPES.contains(&self)
    }

    pub fn is_off_day(self) -> bool {
        Self::OFF_DAY_TYPES.contains(&self)
    }

    pub fn is_multi_assignable(self) -> bool {
        Self::MULTI_ASSIGNABLE.contains(&self)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "request_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    DayOff,
    PaidLeave,
    /// Persisted and round-tripped but not enforced by any H/S rule — see
    /// DESIGN.md's note on `day_shift_request`.
    DayShiftRequest,
}

impl RequestType {
    /// H12/H13 map a hard day-off/paid-leave request onto the shift that
    /// must be forced to 1. `None` for `DayShiftRequest`, which is not
    /// wired into the solver model.
    pub fn mapped_shift(self) -> Option<ShiftType> {
        match self {
            RequestType::DayOff => Some(ShiftType::DayOff),
            RequestType::PaidLeave => Some(ShiftType::PaidLeave),
            RequestType::DayShiftRequest => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "schedule_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Draft,
    Published,
}

pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

pub trait Identifiable {
    fn id(&self) -> Uuid;
}
