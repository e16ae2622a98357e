//! S4: early-shift fairness term — max-min, across early-capable members,
//! of each member's total early-shift designations. Zero if no member
//! carries the `early_shift` capability.

use selen::prelude::*;

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_s4(
    model: &mut Model,
    vars: &VariableTensor,
    ctx: &SolveContext,
) -> SolverResult<Option<VarId>> {
    let early_capable: Vec<usize> = vars.early_capable_members().collect();
    if early_capable.is_empty() {
        return Ok(None);
    }

    let early_counts: Vec<VarId> = early_capable
        .iter()
        .map(|&m| {
            let early_vars: Vec<VarId> = (0..ctx.day_count())
                .filter_map(|d| vars.early(m, d))
                .collect();
            model.sum(&early_vars)
        })
        .collect();

    let min_var = model.min(&early_counts)?;
    let max_var = model.max(&early_counts)?;
    Ok(Some(model.sub(max_var, min_var)))
}
