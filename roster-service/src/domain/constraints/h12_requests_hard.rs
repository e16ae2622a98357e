//! H12: Step-1 hard mode — every day-off/paid-leave request is forced.
//! `day_shift_request` has no `mapped_shift` and is persisted-and-ignored
//! here, per spec.md §9's open question.

use selen::prelude::*;

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h12(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    for &(m, d, request_type) in &ctx.requests {
        let Some(mapped_shift) = request_type.mapped_shift() else {
            continue;
        };
        model.new(vars.var(m, d, mapped_shift).eq(1));
    }
}
