//! H7: two members in a forbidden (NG) pair never both work a night shift
//! on the same day, regardless of which night shift type each holds.

use selen::prelude::*;
use shared::ShiftType;

use crate::domain::context::SolveContext;
use crate::domain::variables::VariableTensor;

pub fn add_h7(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) {
    for &(a, b) in &ctx.ng_pairs {
        for d in 0..ctx.day_count() {
            for &ns1 in ShiftType::NIGHT_SHIFT_TYPES {
                for &ns2 in ShiftType::NIGHT_SHIFT_TYPES {
                    let va = vars.var(a, d, ns1);
                    let vb = vars.var(b, d, ns2);
                    model.int_lin_le(&[1, 1], &[va, vb], 1);
                }
            }
        }
    }
}
