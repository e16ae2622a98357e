//! H14: if a rookie is assigned any ward-family shift on a day, the ward
//! family's total headcount that day must be at least 5. The rookie's
//! ward assignment is reified into a boolean (`rookie_in_ward`) and the
//! headcount floor is enforced only when that boolean is true.

use selen::prelude::*;
use shared::{CapabilityType, ShiftType};

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h14(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    let rookies: Vec<usize> = ctx
        .members
        .iter()
        .enumerate()
        .filter(|(_, m)| m.has(CapabilityType::Rookie))
        .map(|(i, _)| i)
        .collect();
    if rookies.is_empty() {
        return;
    }

    for d in 0..ctx.day_count() {
        let ward_total_vars: Vec<VarId> = (0..ctx.member_count())
            .flat_map(|m| vars.vars_for_shift_types(m, d, ShiftType::WARD_SHIFT_TYPES))
            .collect();
        let ward_total = model.sum(&ward_total_vars);

        for &r in &rookies {
            let rookie_ward_vars = vars.vars_for_shift_types(r, d, ShiftType::WARD_SHIFT_TYPES);
            let rookie_in_ward = model.bool_or(&rookie_ward_vars);
            // ward_total >= 5 * rookie_in_ward: binds only when the rookie
            // is actually in a ward-family shift today.
            model.int_lin_le(&[-1, 5], &[ward_total, rookie_in_ward], 0);
        }
    }
}
