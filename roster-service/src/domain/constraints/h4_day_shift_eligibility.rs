//! H4: members without the `day_shift` capability never work a
//! `DAY_SHIFT_TYPES` shift.

use selen::prelude::*;
use shared::{CapabilityType, ShiftType};

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h4(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    for (m, member) in ctx.members.iter().enumerate() {
        if member.has(CapabilityType::DayShift) {
            continue;
        }
        for d in 0..ctx.day_count() {
            for &shift in ShiftType::DAY_SHIFT_TYPES {
                model.new(vars.var(m, d, shift).eq(0));
            }
        }
    }
}
