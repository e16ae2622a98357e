//! H17: a member with a nonzero `min_night_shifts` floor must reach it
//! across the month.

use selen::prelude::*;
use shared::ShiftType;

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h17(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    for (m, member) in ctx.members.iter().enumerate() {
        if member.min_night_shifts <= 0 {
            continue;
        }
        let night_vars: Vec<VarId> = (0..ctx.day_count())
            .flat_map(|d| vars.vars_for_shift_types(m, d, ShiftType::NIGHT_SHIFT_TYPES))
            .collect();
        let total = model.sum(&night_vars);
        model.new(total.ge(member.min_night_shifts));
    }
}
