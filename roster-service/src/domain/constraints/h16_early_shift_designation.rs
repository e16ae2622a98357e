//! H16: on weekdays, exactly one early-capable member is designated early
//! and must work some day-shift type; on saturdays/sundays/holidays none
//! are. Degrades to a no-op if the unit has no early-capable members.

use selen::prelude::*;
use shared::ShiftType;

use crate::domain::calendar::DayType;
use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h16(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    let early_capable: Vec<usize> = vars.early_capable_members().collect();
    if early_capable.is_empty() {
        return;
    }

    for d in 0..ctx.day_count() {
        if ctx.day_types[d] != DayType::Weekday {
            for &m in &early_capable {
                if let Some(early_var) = vars.early(m, d) {
                    model.new(early_var.eq(0));
                }
            }
            continue;
        }

        let early_vars: Vec<VarId> = early_capable
            .iter()
            .filter_map(|&m| vars.early(m, d))
            .collect();
        let designated = model.sum(&early_vars);
        model.new(designated.eq(1));

        for &m in &early_capable {
            let Some(early_var) = vars.early(m, d) else {
                continue;
            };
            let day_shift_vars = vars.vars_for_shift_types(m, d, ShiftType::DAY_SHIFT_TYPES);
            let day_shift_sum = model.sum(&day_shift_vars);
            // day_shift_sum >= early_var: binds only when this member is
            // today's early designee.
            model.int_lin_le(&[-1, 1], &[day_shift_sum, early_var], 0);
        }
    }
}
