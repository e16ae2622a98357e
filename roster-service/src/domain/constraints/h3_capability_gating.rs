//! H3: a member missing any of a shift's required capability tags, or
//! whose qualification doesn't match a required one, never gets assigned
//! to that shift.

use selen::prelude::*;

use crate::domain::catalog;
use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h3(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    for req in catalog::staffing_requirements() {
        for (m, member) in ctx.members.iter().enumerate() {
            let has_capabilities = req
                .required_capabilities
                .iter()
                .all(|cap| member.has(*cap));
            let has_qualification = req
                .required_qualification
                .map(|q| member.qualification == q)
                .unwrap_or(true);

            if has_capabilities && has_qualification {
                continue;
            }

            for d in 0..ctx.day_count() {
                model.new(vars.var(m, d, req.shift_type).eq(0));
            }
        }
    }
}
