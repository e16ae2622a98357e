//! Constraint library (§4.4/§4.5): one pure builder function per rule,
//! each appending to a shared `Model`/`VariableTensor`. Flat, no
//! inheritance — matches the teacher's one-rule-per-file layout under
//! `domain/rules/`, just scaled to a CP-SAT-class model instead of a
//! greedy day-by-day heuristic.

mod h1_exactly_one_per_day;
mod h2_staffing_bounds;
mod h3_capability_gating;
mod h4_day_shift_eligibility;
mod h5_night_shift_eligibility;
mod h6_night_then_off;
mod h7_ng_pairs;
mod h8_midwife_on_night;
mod h9_max_consecutive_work;
mod h10_night_ceiling;
mod h11_off_day_quota;
mod h12_requests_hard;
mod h13_paid_leave_gating;
mod h14_rookie_ward_staffing;
mod h15_sunday_holiday_shutdown;
mod h16_early_shift_designation;
mod h17_night_floor;
mod s1_requests_soft;
mod s2_night_balance;
mod s3_holiday_balance;
mod s4_early_balance;

pub use h1_exactly_one_per_day::add_h1;
pub use h2_staffing_bounds::add_h2;
pub use h3_capability_gating::add_h3;
pub use h4_day_shift_eligibility::add_h4;
pub use h5_night_shift_eligibility::add_h5;
pub use h6_night_then_off::add_h6;
pub use h7_ng_pairs::add_h7;
pub use h8_midwife_on_night::add_h8;
pub use h9_max_consecutive_work::add_h9;
pub use h10_night_ceiling::add_h10;
pub use h11_off_day_quota::add_h11;
pub use h12_requests_hard::add_h12;
pub use h13_paid_leave_gating::add_h13;
pub use h14_rookie_ward_staffing::add_h14;
pub use h15_sunday_holiday_shutdown::add_h15;
pub use h16_early_shift_designation::add_h16;
pub use h17_night_floor::add_h17;
pub use s1_requests_soft::add_s1;
pub use s2_night_balance::add_s2;
pub use s3_holiday_balance::add_s3;
pub use s4_early_balance::add_s4;

/// Labels for the constraints the relaxation-diagnostics pass (§4.9) is
/// allowed to drop. H1-H5 are structural and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaxableConstraint {
    H6,
    H7,
    H8,
    H9,
    H10,
    H11,
    H14,
    H15,
    H16,
}

impl RelaxableConstraint {
    pub fn label(self) -> &'static str {
        match self {
            RelaxableConstraint::H6 => "H6 (night shift must be followed by an off day)",
            RelaxableConstraint::H7 => "H7 (NG pair cannot both work a night shift)",
            RelaxableConstraint::H8 => "H8 (a midwife must be on night duty)",
            RelaxableConstraint::H9 => "H9 (max 5 consecutive working days)",
            RelaxableConstraint::H10 => "H10 (per-person night shift ceiling)",
            RelaxableConstraint::H11 => "H11 (off-day quota)",
            RelaxableConstraint::H14 => "H14 (rookie ward staffing minimum)",
            RelaxableConstraint::H15 => "H15 (sunday/holiday outpatient shutdown)",
            RelaxableConstraint::H16 => "H16 (early-shift designation)",
        }
    }
}

/// Fixed order the relaxation probe walks through (§4.9, §SPEC_FULL module 8).
pub const RELAXABLE_CONSTRAINTS: &[RelaxableConstraint] = &[
    RelaxableConstraint::H6,
    RelaxableConstraint::H7,
    RelaxableConstraint::H8,
    RelaxableConstraint::H9,
    RelaxableConstraint::H10,
    RelaxableConstraint::H11,
    RelaxableConstraint::H14,
    RelaxableConstraint::H15,
    RelaxableConstraint::H16,
];
