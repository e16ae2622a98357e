//! Relaxation diagnostics (§4.9): when both solve steps and the static
//! checks (§4.8) come up empty, probe whether dropping exactly one
//! optional hard constraint would admit a solution. Each probe rebuilds
//! a fresh model — `selen`'s `Model` is consumed by `solve`/`minimize`/
//! `maximize`, so there is no "remove a constraint" operation on a live
//! model to fall back on.

use selen::prelude::*;

use crate::domain::constraints::{RelaxableConstraint, RELAXABLE_CONSTRAINTS};
use crate::domain::context::SolveContext;
use crate::domain::generator::{add_hard_constraints, build_variables};

const RELAXATION_TIMEOUT_MS: u64 = 10_000;

/// Rebuilds the Step-2 hard-constraint set (H12 omitted, matching the
/// configuration both solve attempts have already failed under) once per
/// entry in `RELAXABLE_CONSTRAINTS`, each time dropping a different one.
/// Returns a rendered bullet line for every relaxation that turns out
/// feasible, in the fixed probe order.
pub fn run_relaxation_diagnostics(ctx: &SolveContext) -> Vec<String> {
    let mut admitted = Vec::new();

    for &relaxable in RELAXABLE_CONSTRAINTS {
        if probe(ctx, relaxable) {
            admitted.push(format!("・{}を緩和すると解が見つかります", relaxable.label()));
        }
    }

    admitted
}

fn probe(ctx: &SolveContext, relaxable: RelaxableConstraint) -> bool {
    let mut model =
        Model::with_config(SolverConfig::default().with_timeout_ms(RELAXATION_TIMEOUT_MS));
    let vars = build_variables(&mut model, ctx);
    add_hard_constraints(&mut model, &vars, ctx, Some(relaxable), false);
    model.solve().is_ok()
}
