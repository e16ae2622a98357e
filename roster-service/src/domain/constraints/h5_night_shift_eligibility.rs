//! H5: members without the `night_shift` capability never work a
//! `NIGHT_SHIFT_TYPES` shift.

use selen::prelude::*;
use shared::{CapabilityType, ShiftType};

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h5(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    for (m, member) in ctx.members.iter().enumerate() {
        if member.has(CapabilityType::NightShift) {
            continue;
        }
        for d in 0..ctx.day_count() {
            for &shift in ShiftType::NIGHT_SHIFT_TYPES {
                model.new(vars.var(m, d, shift).eq(0));
            }
        }
    }
}
