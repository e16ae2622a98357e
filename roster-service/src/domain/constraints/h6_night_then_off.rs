//! H6: a member working a night shift on day i must be in an off-day type
//! on day i+1.

use selen::prelude::*;
use shared::ShiftType;

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h6(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    let last = ctx.day_count().saturating_sub(1);
    for m in 0..ctx.member_count() {
        for d in 0..last {
            let night_vars = vars.vars_for_shift_types(m, d, ShiftType::NIGHT_SHIFT_TYPES);
            let off_vars = vars.vars_for_shift_types(m, d + 1, ShiftType::OFF_DAY_TYPES);
            let night_sum = model.sum(&night_vars);
            let off_sum = model.sum(&off_vars);
            model.new(off_sum.ge(night_sum));
        }
    }
}
