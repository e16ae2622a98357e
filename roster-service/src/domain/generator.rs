//! Generator / orchestrator (§4.6): loads inputs, derives off-day quotas,
//! assembles hard constraints, tries Step-1 (hard requests), falls back to
//! Step-2 (soft requests) and finally to diagnostics. Analogous to the
//! teacher's `schedule_generator.rs`, but a CP-SAT-class build-and-solve
//! pipeline replaces the teacher's greedy day-by-day heuristic.

use std::collections::HashSet;

use chrono::NaiveDate;
use selen::prelude::*;
use shared::{CapabilityType, ShiftType};
use uuid::Uuid;

use crate::domain::constraints::{self, RelaxableConstraint};
use crate::domain::context::SolveContext;
use crate::domain::diagnostics;
use crate::domain::error::RosterError;
use crate::domain::loader::{MemberRecord, NgPairRecord, RequestRecord, RosterInputLoader};
use crate::domain::variables::VariableTensor;

/// The CPU-bound budgets baked into the algorithm (spec.md §9 "Solver
/// timeout budgeting"): upper bounds, not configuration.
const PRIMARY_TIMEOUT_MS: u64 = 60_000;

pub type GenerationError = RosterError;

/// Inputs for one month, populated exclusively from the loader trait —
/// never directly from a `sqlx::Pool` (§6's storage-agnostic boundary).
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub year_month: String,
    pub members: Vec<MemberRecord>,
    pub ng_pairs: Vec<NgPairRecord>,
    pub requests: Vec<RequestRecord>,
    pub pediatric_dates: HashSet<NaiveDate>,
}

impl GenerationContext {
    pub async fn load(
        loader: &dyn RosterInputLoader,
        year_month: &str,
    ) -> Result<Self, GenerationError> {
        let members = loader.load_members().await?;
        let ng_pairs = loader.load_ng_pairs().await?;
        let requests = loader.load_requests(year_month).await?;
        let pediatric_dates = loader.load_pediatric_dates(year_month).await?;

        Ok(Self {
            year_month: year_month.to_string(),
            members,
            ng_pairs,
            requests,
            pediatric_dates,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentOutput {
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub shift_type: ShiftType,
    pub is_early: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfulfilledRequest {
    pub member_id: Uuid,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub assignments: Vec<AssignmentOutput>,
    pub unfulfilled_requests: Vec<UnfulfilledRequest>,
}

pub struct RosterGenerator;

impl RosterGenerator {
    /// Runs the full LOAD -> STEP1 -> STEP2 -> DIAGNOSE state machine
    /// (§4.6). `ctx` must already be loaded via `GenerationContext::load`.
    pub fn generate(ctx: &GenerationContext) -> Result<GenerationOutcome, GenerationError> {
        let solve_ctx = SolveContext::build(
            &ctx.year_month,
            &ctx.members,
            &ctx.ng_pairs,
            &ctx.requests,
            &ctx.pediatric_dates,
        )?;

        if let Some(outcome) = Self::try_step1(&solve_ctx) {
            return Ok(outcome);
        }

        if let Some(outcome) = Self::try_step2(&solve_ctx) {
            return Ok(outcome);
        }

        Self::diagnose(&solve_ctx)
    }

    fn try_step1(ctx: &SolveContext) -> Option<GenerationOutcome> {
        let mut model = Model::with_config(SolverConfig::default().with_timeout_ms(PRIMARY_TIMEOUT_MS));
        let vars = build_variables(&mut model, ctx);
        add_hard_constraints(&mut model, &vars, ctx, None, true);

        let objective = step1_objective(&mut model, &vars, ctx);
        let solution = model.minimize(objective).ok()?;

        Some(GenerationOutcome {
            assignments: extract_assignments(&solution, &vars, ctx),
            unfulfilled_requests: Vec::new(),
        })
    }

    fn try_step2(ctx: &SolveContext) -> Option<GenerationOutcome> {
        let mut model = Model::with_config(SolverConfig::default().with_timeout_ms(PRIMARY_TIMEOUT_MS));
        let vars = build_variables(&mut model, ctx);
        add_hard_constraints(&mut model, &vars, ctx, None, false);

        let objective = step2_objective(&mut model, &vars, ctx);
        let solution = model.maximize(objective).ok()?;

        let assignments = extract_assignments(&solution, &vars, ctx);
        let unfulfilled_requests = ctx
            .requests
            .iter()
            .filter_map(|&(m, d, request_type)| {
                let mapped_shift = request_type.mapped_shift()?;
                let assigned = solution.get_int(vars.var(m, d, mapped_shift)) == 1;
                if assigned {
                    None
                } else {
                    Some(UnfulfilledRequest {
                        member_id: ctx.members[m].id,
                        date: ctx.dates[d],
                    })
                }
            })
            .collect();

        Some(GenerationOutcome {
            assignments,
            unfulfilled_requests,
        })
    }

    fn diagnose(ctx: &SolveContext) -> Result<GenerationOutcome, GenerationError> {
        let static_messages = diagnostics::run_static_diagnostics(ctx);
        if !static_messages.is_empty() {
            return Err(RosterError::InfeasibleWithDiagnosis(diagnostics::render_block(
                &static_messages,
            )));
        }

        let relaxations = crate::domain::relax::run_relaxation_diagnostics(ctx);
        if !relaxations.is_empty() {
            let mut lines = vec!["制約の組み合わせにより解が見つかりませんでした。".to_string()];
            lines.extend(relaxations);
            return Err(RosterError::InfeasibleWithDiagnosis(lines.join("\n")));
        }

        Err(RosterError::InfeasibleGeneric)
    }
}

fn early_capable_indices(ctx: &SolveContext) -> Vec<usize> {
    ctx.members
        .iter()
        .enumerate()
        .filter(|(_, m)| m.has(CapabilityType::EarlyShift))
        .map(|(i, _)| i)
        .collect()
}

pub(crate) fn build_variables(model: &mut Model, ctx: &SolveContext) -> VariableTensor {
    let early_capable = early_capable_indices(ctx);
    VariableTensor::build(model, &ctx.member_ids(), &ctx.dates, &early_capable)
}

/// Applies H1-H17 (structural H1-H5 always, H13 always, H12 gated by
/// `include_h12`, the rest gated by `skip`). Shared by Step-1/Step-2 and
/// the relaxation probe (§4.9) so the three paths can never drift apart.
pub(crate) fn add_hard_constraints(
    model: &mut Model,
    vars: &VariableTensor,
    ctx: &SolveContext,
    skip: Option<RelaxableConstraint>,
    include_h12: bool,
) {
    constraints::add_h1(model, vars, ctx);
    constraints::add_h2(model, vars, ctx);
    constraints::add_h3(model, vars, ctx);
    constraints::add_h4(model, vars, ctx);
    constraints::add_h5(model, vars, ctx);

    if skip != Some(RelaxableConstraint::H6) {
        constraints::add_h6(model, vars, ctx);
    }
    if skip != Some(RelaxableConstraint::H7) {
        constraints::add_h7(model, vars, ctx);
    }
    if skip != Some(RelaxableConstraint::H8) {
        constraints::add_h8(model, vars, ctx);
    }
    if skip != Some(RelaxableConstraint::H9) {
        constraints::add_h9(model, vars, ctx);
    }
    if skip != Some(RelaxableConstraint::H10) {
        constraints::add_h10(model, vars, ctx);
    }
    if skip != Some(RelaxableConstraint::H11) {
        constraints::add_h11(model, vars, ctx);
    }

    if include_h12 {
        constraints::add_h12(model, vars, ctx);
    }
    constraints::add_h13(model, vars, ctx);

    if skip != Some(RelaxableConstraint::H14) {
        constraints::add_h14(model, vars, ctx);
    }
    if skip != Some(RelaxableConstraint::H15) {
        constraints::add_h15(model, vars, ctx);
    }
    if skip != Some(RelaxableConstraint::H16) {
        constraints::add_h16(model, vars, ctx);
    }
    constraints::add_h17(model, vars, ctx);
}

fn weighted(model: &mut Model, weight: i32, term: Option<VarId>) -> Option<VarId> {
    term.map(|v| model.mul(v, int(weight)))
}

fn sum_or_zero(model: &mut Model, terms: Vec<Option<VarId>>) -> VarId {
    let present: Vec<VarId> = terms.into_iter().flatten().collect();
    if present.is_empty() {
        model.int(0, 0)
    } else {
        model.sum(&present)
    }
}

/// `minimize(10*night_diff + 5*holiday_diff + 3*early_diff)` (§4.5).
fn step1_objective(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) -> VarId {
    let night_diff = constraints::add_s2(model, vars, ctx).expect("finite member set");
    let holiday_diff = constraints::add_s3(model, vars, ctx).expect("finite member set");
    let early_diff = constraints::add_s4(model, vars, ctx).expect("finite member set");

    let terms = vec![
        weighted(model, 10, night_diff),
        weighted(model, 5, holiday_diff),
        weighted(model, 3, early_diff),
    ];
    sum_or_zero(model, terms)
}

/// `maximize(100*fulfilled - 10*night_diff - 5*holiday_diff - 3*early_diff)` (§4.5).
fn step2_objective(model: &mut Model, vars: &VariableTensor, ctx: &SolveContext) -> VarId {
    let fulfilled = constraints::add_s1(model, vars, ctx);
    let night_diff = constraints::add_s2(model, vars, ctx).expect("finite member set");
    let holiday_diff = constraints::add_s3(model, vars, ctx).expect("finite member set");
    let early_diff = constraints::add_s4(model, vars, ctx).expect("finite member set");

    let terms = vec![
        weighted(model, 100, fulfilled),
        weighted(model, -10, night_diff),
        weighted(model, -5, holiday_diff),
        weighted(model, -3, early_diff),
    ];
    sum_or_zero(model, terms)
}

fn extract_assignments(
    solution: &Solution,
    vars: &VariableTensor,
    ctx: &SolveContext,
) -> Vec<AssignmentOutput> {
    let mut assignments = Vec::with_capacity(ctx.member_count() * ctx.day_count());
    for m in 0..ctx.member_count() {
        for d in 0..ctx.day_count() {
            let shift_type = ShiftType::ALL
                .iter()
                .copied()
                .find(|&s| solution.get_int(vars.var(m, d, s)) == 1)
                .expect("H1 guarantees exactly one shift per member per day");

            let is_early = vars
                .early(m, d)
                .map(|v| solution.get_int(v) == 1)
                .unwrap_or(false);

            assignments.push(AssignmentOutput {
                member_id: ctx.members[m].id,
                date: ctx.dates[d],
                shift_type,
                is_early,
            });
        }
    }
    assignments
}

