//! Static diagnostics (§4.8): analytic capacity/capability checks run
//! before relaxation probing, no solver call involved. Grounded in
//! `original_source/backend/solver/diagnostics.py`; message wording is
//! preserved byte-for-byte since it is outward-facing product copy.

use shared::{CapabilityType, Qualification, ShiftType};

use crate::domain::calendar::DayType;
use crate::domain::catalog;
use crate::domain::context::SolveContext;

/// One diagnostic finding: structured fields plus its rendered
/// `・`-prefixed Japanese line, ready to join into the §6 message block.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub rendered: String,
}

impl DiagnosticMessage {
    fn new(text: String) -> Self {
        Self {
            rendered: format!("・{text}"),
        }
    }
}

fn capability_label(capability: CapabilityType) -> &'static str {
    match capability {
        CapabilityType::OutpatientLeader => "外来リーダー",
        CapabilityType::WardLeader => "病棟リーダー",
        CapabilityType::NightLeader => "夜勤リーダー",
        CapabilityType::DayShift => "日勤",
        CapabilityType::NightShift => "夜勤",
        CapabilityType::Beauty => "美容",
        CapabilityType::MwOutpatient => "助産師外来",
        CapabilityType::WardStaff => "病棟",
        CapabilityType::Rookie => "新人",
        CapabilityType::EarlyShift => "早番",
    }
}

fn qualification_label(qualification: Qualification) -> &'static str {
    match qualification {
        Qualification::Nurse => "看護師",
        Qualification::AssociateNurse => "准看護師",
        Qualification::Midwife => "助産師",
    }
}

/// Mirrors `_format_requirements` (diagnostics.py:178-184): capability
/// labels joined by `、`, with `職能={label}` appended when the shift
/// also requires a qualification.
fn format_requirements(req: &catalog::StaffingRequirement) -> String {
    let mut parts: Vec<String> = req
        .required_capabilities
        .iter()
        .map(|&c| capability_label(c).to_string())
        .collect();
    if let Some(qualification) = req.required_qualification {
        parts.push(format!("職能={}", qualification_label(qualification)));
    }
    if parts.is_empty() {
        "なし".to_string()
    } else {
        parts.join("、")
    }
}

fn eligible_for(ctx: &SolveContext, req: &catalog::StaffingRequirement) -> Vec<&str> {
    ctx.members
        .iter()
        .filter(|m| {
            let caps_ok = req.required_capabilities.iter().all(|c| m.has(*c));
            let qual_ok = req
                .required_qualification
                .map(|q| m.qualification == q)
                .unwrap_or(true);
            caps_ok && qual_ok
        })
        .map(|m| m.name.as_str())
        .collect()
}

/// Check 1: per-shift capability/qualification eligible-count shortfall.
fn check_shift_eligibility(ctx: &SolveContext) -> Vec<DiagnosticMessage> {
    let mut out = Vec::new();
    let present_day_types: std::collections::HashSet<DayType> = ctx.day_types.iter().copied().collect();

    for req in catalog::staffing_requirements() {
        for day_type in [DayType::Weekday, DayType::Saturday, DayType::SundayHoliday] {
            if !present_day_types.contains(&day_type) {
                continue;
            }
            let (min_staff, _) = catalog::min_max_for(req.shift_type, day_type);
            if min_staff == 0 {
                continue;
            }
            let eligible = eligible_for(ctx, req);
            if (eligible.len() as u32) < min_staff {
                let names = if eligible.is_empty() {
                    "なし".to_string()
                } else {
                    eligible.join("、")
                };
                out.push(DiagnosticMessage::new(format!(
                    "{}に配置可能なメンバーが{}名必要ですが、{}名しかいません（{}）。必要な能力: {}",
                    shift_label(req.shift_type),
                    min_staff,
                    eligible.len(),
                    names,
                    format_requirements(req)
                )));
            }
        }
    }
    out
}

/// Check 2: total night-slot capacity vs. the sum of per-member ceilings.
fn check_night_capacity(ctx: &SolveContext) -> Vec<DiagnosticMessage> {
    let total_night_slots = (ctx.day_count() as i64) * 2;
    let night_capable: Vec<_> = ctx
        .members
        .iter()
        .filter(|m| m.has(CapabilityType::NightShift) || m.has(CapabilityType::NightLeader))
        .collect();
    let total_night_capacity: i64 = night_capable.iter().map(|m| m.max_night_shifts as i64).sum();

    if total_night_capacity < total_night_slots {
        return vec![DiagnosticMessage::new(format!(
            "月間の夜勤枠は{}回ですが、メンバーの夜勤上限の合計は{}回です。夜勤可能メンバー: {}名",
            total_night_slots,
            total_night_capacity,
            night_capable.len()
        ))];
    }
    Vec::new()
}

/// Check 3: night-leader capacity (1 slot/day).
fn check_night_leader_capacity(ctx: &SolveContext) -> Vec<DiagnosticMessage> {
    let total_night_days = ctx.day_count() as i64;
    let leaders: Vec<_> = ctx
        .members
        .iter()
        .filter(|m| m.has(CapabilityType::NightLeader))
        .collect();
    let total_leader_capacity: i64 = leaders.iter().map(|m| m.max_night_shifts as i64).sum();

    if total_leader_capacity < total_night_days {
        let names = if leaders.is_empty() {
            "なし".to_string()
        } else {
            leaders.iter().map(|m| m.name.as_str()).collect::<Vec<_>>().join("、")
        };
        return vec![DiagnosticMessage::new(format!(
            "夜勤リーダー枠は毎日1名（月{}回）必要ですが、夜勤リーダー可能メンバーの夜勤上限合計は{}回です。対象: {}",
            total_night_days, total_leader_capacity, names
        ))];
    }
    Vec::new()
}

/// Check 4: night-midwife capacity (1 slot/day).
fn check_night_midwife_capacity(ctx: &SolveContext) -> Vec<DiagnosticMessage> {
    let total_night_days = ctx.day_count() as i64;
    let night_midwives: Vec<_> = ctx
        .members
        .iter()
        .filter(|m| {
            m.qualification == Qualification::Midwife
                && (m.has(CapabilityType::NightShift) || m.has(CapabilityType::NightLeader))
        })
        .collect();
    let total_capacity: i64 = night_midwives.iter().map(|m| m.max_night_shifts as i64).sum();

    if total_capacity < total_night_days {
        let names = if night_midwives.is_empty() {
            "なし".to_string()
        } else {
            night_midwives.iter().map(|m| m.name.as_str()).collect::<Vec<_>>().join("、")
        };
        return vec![DiagnosticMessage::new(format!(
            "夜勤には毎日最低1名の助産師が必要（月{}回）ですが、夜勤可能な助産師の夜勤上限合計は{}回です。対象: {}",
            total_night_days, total_capacity, names
        ))];
    }
    Vec::new()
}

/// Check 5: day-shift capacity approximation.
fn check_day_shift_capacity(ctx: &SolveContext) -> Vec<DiagnosticMessage> {
    let total_day_slots: i64 = catalog::staffing_requirements()
        .iter()
        .filter(|r| ShiftType::DAY_SHIFT_TYPES.contains(&r.shift_type))
        .map(|r| {
            ctx.day_types
                .iter()
                .map(|&dt| catalog::min_max_for(r.shift_type, dt).0 as i64)
                .sum::<i64>()
        })
        .sum();

    let total_night_slots = (ctx.day_count() as i64) * 2;
    let available_for_day: i64 = ctx
        .members
        .iter()
        .map(|m| ctx.day_count() as i64 - m.required_off as i64)
        .sum::<i64>()
        - total_night_slots;

    if total_day_slots > available_for_day {
        return vec![DiagnosticMessage::new(format!(
            "日勤帯の必要枠は月{}人日ですが、夜勤を除いた勤務可能日数は約{}人日です。メンバーを増やすか、公休日数の調整を検討してください。",
            total_day_slots, available_for_day
        ))];
    }
    Vec::new()
}

/// Check 6: per-member dead-ends (no usable capability, or night-only
/// capacity below the days they are expected to work).
fn check_member_dead_ends(ctx: &SolveContext) -> Vec<DiagnosticMessage> {
    let mut out = Vec::new();
    for m in &ctx.members {
        let has_day = m.has(CapabilityType::DayShift);
        let has_night = m.has(CapabilityType::NightShift) || m.has(CapabilityType::NightLeader);

        if !has_day && !has_night {
            out.push(DiagnosticMessage::new(format!(
                "{}は日勤・夜勤どちらの能力も持っていないため、シフトに配置できません。能力設定を確認してください。",
                m.name
            )));
            continue;
        }

        if !has_day && has_night {
            let required_work = ctx.day_count() as i32 - m.required_off;
            if m.max_night_shifts < required_work {
                out.push(DiagnosticMessage::new(format!(
                    "{}は夜勤のみ可能（日勤能力なし）ですが、必要勤務日数{}日に対して夜勤上限は{}回です。日勤能力を追加するか、夜勤上限を引き上げてください。",
                    m.name, required_work, m.max_night_shifts
                )));
            }
        }
    }
    out
}

fn shift_label(shift_type: ShiftType) -> &'static str {
    match shift_type {
        ShiftType::OutpatientLeader => "外来リーダー",
        ShiftType::TreatmentRoom => "処置室",
        ShiftType::Beauty => "美容",
        ShiftType::MwOutpatient => "助産師外来",
        ShiftType::WardLeader => "病棟リーダー",
        ShiftType::Ward => "病棟",
        ShiftType::Delivery => "分娩",
        ShiftType::DeliveryCharge => "分娩当番",
        ShiftType::NightLeader => "夜勤リーダー",
        ShiftType::Night => "夜勤",
        ShiftType::WardFree => "病棟フリー",
        ShiftType::OutpatientFree => "外来フリー",
        ShiftType::DayOff => "公休",
        ShiftType::PaidLeave => "有給",
    }
}

/// Concatenates all six checks, in spec order.
pub fn run_static_diagnostics(ctx: &SolveContext) -> Vec<DiagnosticMessage> {
    let mut out = Vec::new();
    out.extend(check_shift_eligibility(ctx));
    out.extend(check_night_capacity(ctx));
    out.extend(check_night_leader_capacity(ctx));
    out.extend(check_night_midwife_capacity(ctx));
    out.extend(check_day_shift_capacity(ctx));
    out.extend(check_member_dead_ends(ctx));
    out
}

/// Renders the §6 wire format: the static-diagnosis header plus bullet
/// lines, one per finding.
pub fn render_block(messages: &[DiagnosticMessage]) -> String {
    let mut lines = vec!["以下の問題が見つかりました:".to_string()];
    lines.extend(messages.iter().map(|m| m.rendered.clone()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::loader::MemberRecord;
    use shared::{EmploymentType, Qualification};
    use std::collections::HashSet;
    use uuid::Uuid;

    fn bare_member(name: &str, caps: &[CapabilityType]) -> MemberRecord {
        MemberRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            qualification: Qualification::Nurse,
            employment_type: EmploymentType::FullTime,
            max_night_shifts: 1,
            min_night_shifts: 0,
            night_shift_deduction_balance: 0,
            capabilities: caps.iter().copied().collect(),
        }
    }

    #[test]
    fn single_member_produces_outpatient_leader_and_day_capacity_findings() {
        let member = bare_member(
            "Alone",
            &[CapabilityType::DayShift, CapabilityType::WardStaff],
        );
        let ctx = SolveContext::build("2025-01", &[member], &[], &[], &HashSet::new()).unwrap();

        let messages = run_static_diagnostics(&ctx);
        let rendered: Vec<&str> = messages.iter().map(|m| m.rendered.as_str()).collect();

        assert!(rendered.iter().any(|m| m.contains("外来リーダー")));
    }

    #[test]
    fn fully_capable_roster_of_fifteen_produces_no_findings() {
        let all_caps = [
            CapabilityType::OutpatientLeader,
            CapabilityType::WardLeader,
            CapabilityType::NightLeader,
            CapabilityType::DayShift,
            CapabilityType::NightShift,
            CapabilityType::Beauty,
            CapabilityType::MwOutpatient,
            CapabilityType::WardStaff,
        ];
        let members: Vec<MemberRecord> = (0..15)
            .map(|i| {
                let mut m = bare_member(&format!("m{i}"), &all_caps);
                m.qualification = Qualification::Midwife;
                m.max_night_shifts = 5;
                m
            })
            .collect();
        let ctx = SolveContext::build("2025-01", &members, &[], &[], &HashSet::new()).unwrap();

        assert!(run_static_diagnostics(&ctx).is_empty());
    }
}
