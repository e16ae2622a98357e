//! S1: Step-2's soft request term — the count of requests whose mapped
//! shift ended up assigned. H12 is omitted in Step-2, so these variables
//! are free; this just sums them for the objective.

use selen::prelude::*;

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_s1(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) -> Option<VarId> {
    if ctx.requests.is_empty() {
        return None;
    }

    let fulfilled_vars: Vec<VarId> = ctx
        .requests
        .iter()
        .filter_map(|&(m, d, request_type)| {
            request_type.mapped_shift().map(|shift| vars.var(m, d, shift))
        })
        .collect();
    if fulfilled_vars.is_empty() {
        return None;
    }

    Some(model.sum(&fulfilled_vars))
}
