//! H2: per-shift staffing bounds by day-type, with the pediatric-doctor-day
//! override raising `mw_outpatient`'s minimum to at least 2.

use selen::prelude::*;
use shared::ShiftType;

use crate::domain::catalog;
use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h2(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    for req in catalog::staffing_requirements() {
        for d in 0..ctx.day_count() {
            let (mut lo, hi) = catalog::min_max_for(req.shift_type, ctx.day_types[d]);
            if req.shift_type == ShiftType::MwOutpatient && ctx.pediatric[d] {
                lo = lo.max(2);
            }

            let shift_vars: Vec<VarId> = (0..ctx.member_count())
                .map(|m| vars.var(m, d, req.shift_type))
                .collect();

            if hi == 0 {
                for &v in &shift_vars {
                    model.new(v.eq(0));
                }
                continue;
            }

            let total = model.sum(&shift_vars);
            model.new(total.ge(lo as i32));
            model.new(total.le(hi as i32));
        }
    }
}
