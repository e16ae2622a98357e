//! H10: a member's total night shifts across the month never exceed their
//! `max_night_shifts`.

use selen::prelude::*;
use shared::ShiftType;

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h10(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    for (m, member) in ctx.members.iter().enumerate() {
        let night_vars: Vec<VarId> = (0..ctx.day_count())
            .flat_map(|d| vars.vars_for_shift_types(m, d, ShiftType::NIGHT_SHIFT_TYPES))
            .collect();
        let total = model.sum(&night_vars);
        model.new(total.le(member.max_night_shifts));
    }
}
