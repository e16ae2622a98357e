//! H15: on sunday/holiday dates, outpatient-family day shifts shut down —
//! only the ward family and night shifts still operate.

use selen::prelude::*;
use shared::ShiftType;

use crate::domain::calendar::DayType;
use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h15(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    let non_ward_day_shifts: Vec<ShiftType> = ShiftType::DAY_SHIFT_TYPES
        .iter()
        .copied()
        .filter(|s| !ShiftType::WARD_SHIFT_TYPES.contains(s))
        .collect();

    for d in 0..ctx.day_count() {
        if ctx.day_types[d] != DayType::SundayHoliday {
            continue;
        }
        for m in 0..ctx.member_count() {
            for &shift in &non_ward_day_shifts {
                model.new(vars.var(m, d, shift).eq(0));
            }
        }
    }
}
