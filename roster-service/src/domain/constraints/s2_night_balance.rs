//! S2: night-count fairness term — max(night_count) - min(night_count)
//! across all members. Part of the S1-priority objective (§4.5).

use selen::prelude::*;
use shared::ShiftType;

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_s2(
    model: &mut Model,
    vars: &VariableTensor,
    ctx: &SolveContext,
) -> SolverResult<Option<VarId>> {
    if ctx.member_count() == 0 {
        return Ok(None);
    }

    let night_counts: Vec<VarId> = (0..ctx.member_count())
        .map(|m| {
            let night_vars: Vec<VarId> = (0..ctx.day_count())
                .flat_map(|d| vars.vars_for_shift_types(m, d, ShiftType::NIGHT_SHIFT_TYPES))
                .collect();
            model.sum(&night_vars)
        })
        .collect();

    let min_var = model.min(&night_counts)?;
    let max_var = model.max(&night_counts)?;
    Ok(Some(model.sub(max_var, min_var)))
}
