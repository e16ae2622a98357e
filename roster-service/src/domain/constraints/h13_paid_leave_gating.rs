//! H13: `paid_leave` may only be assigned on a date the member explicitly
//! requested it.

use std::collections::HashSet;

use selen::prelude::*;
use shared::{RequestType, ShiftType};

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h13(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    let requested: HashSet<(usize, usize)> = ctx
        .requests
        .iter()
        .filter(|(_, _, rt)| *rt == RequestType::PaidLeave)
        .map(|&(m, d, _)| (m, d))
        .collect();

    for m in 0..ctx.member_count() {
        for d in 0..ctx.day_count() {
            if requested.contains(&(m, d)) {
                continue;
            }
            model.new(vars.var(m, d, ShiftType::PaidLeave).eq(0));
        }
    }
}
