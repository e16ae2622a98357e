//! H9: no member works more than 5 consecutive days. Enforced as "every
//! sliding window of 6 days contains at least one off-day assignment".

use selen::prelude::*;
use shared::ShiftType;

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

const WINDOW: usize = 6;

pub fn add_h9(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    if ctx.day_count() < WINDOW {
        return;
    }
    for m in 0..ctx.member_count() {
        for start in 0..=(ctx.day_count() - WINDOW) {
            let off_vars: Vec<VarId> = (start..start + WINDOW)
                .flat_map(|d| vars.vars_for_shift_types(m, d, ShiftType::OFF_DAY_TYPES))
                .collect();
            let total = model.sum(&off_vars);
            model.new(total.ge(1));
        }
    }
}
