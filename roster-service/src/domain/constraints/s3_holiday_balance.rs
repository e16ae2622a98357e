//! S3: sunday/holiday fairness term — max-min, across members, of the
//! count of non-off assignments landing on sunday/holiday dates. Zero if
//! the month carries no sunday/holiday dates at all.

use selen::prelude::*;
use shared::ShiftType;

use crate::domain::calendar::DayType;
use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_s3(
    model: &mut Model,
    vars: &VariableTensor,
    ctx: &SolveContext,
) -> SolverResult<Option<VarId>> {
    let sh_days: Vec<usize> = (0..ctx.day_count())
        .filter(|&d| ctx.day_types[d] == DayType::SundayHoliday)
        .collect();
    if sh_days.is_empty() || ctx.member_count() == 0 {
        return Ok(None);
    }

    let holiday_counts: Vec<VarId> = (0..ctx.member_count())
        .map(|m| {
            let off_vars: Vec<VarId> = sh_days
                .iter()
                .flat_map(|&d| vars.vars_for_shift_types(m, d, ShiftType::OFF_DAY_TYPES))
                .collect();
            let off_total = model.sum(&off_vars);
            // non-off count on sunday/holiday dates = total sh days - off count
            model.sub(int(sh_days.len() as i32), off_total)
        })
        .collect();

    let min_var = model.min(&holiday_counts)?;
    let max_var = model.max(&holiday_counts)?;
    Ok(Some(model.sub(max_var, min_var)))
}
