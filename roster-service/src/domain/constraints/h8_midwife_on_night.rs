//! H8: every day, at least one midwife is on night duty. Degrades to a
//! no-op if the unit has no midwives at all, matching the original's
//! `if midwife_night:` guard.

use selen::prelude::*;
use shared::{Qualification, ShiftType};

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h8(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    let midwives: Vec<usize> = ctx
        .members
        .iter()
        .enumerate()
        .filter(|(_, m)| m.qualification == Qualification::Midwife)
        .map(|(i, _)| i)
        .collect();
    if midwives.is_empty() {
        return;
    }

    for d in 0..ctx.day_count() {
        let night_vars: Vec<VarId> = midwives
            .iter()
            .flat_map(|&m| {
                ShiftType::NIGHT_SHIFT_TYPES
                    .iter()
                    .map(move |&ns| vars.var(m, d, ns))
            })
            .collect();
        let total = model.sum(&night_vars);
        model.new(total.ge(1));
    }
}
