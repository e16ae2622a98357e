//! H1: every member has exactly one shift type on every day.

use selen::prelude::*;

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h1(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    for m in 0..ctx.member_count() {
        for d in 0..ctx.day_count() {
            let day_vars = vars.all_shifts(m, d);
            let total = model.sum(day_vars);
            model.new(total.eq(1));
        }
    }
}
