//! H11: full-time members hit their derived off-day quota exactly;
//! part-time members meet or exceed it (§4.7).

use selen::prelude::*;
use shared::ShiftType;

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h11(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    for (m, member) in ctx.members.iter().enumerate() {
        let day_off_vars: Vec<VarId> = (0..ctx.day_count())
            .map(|d| vars.var(m, d, ShiftType::DayOff))
            .collect();
        let total = model.sum(&day_off_vars);

        if member.is_part_time() {
            model.new(total.ge(member.required_off));
        } else {
            model.new(total.eq(member.required_off));
        }
    }
}
