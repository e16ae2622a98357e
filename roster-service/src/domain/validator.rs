//! Stateless edit validator (§4.10): re-checks a handful of hard
//! constraints against the persisted roster after a manual single-
//! assignment edit. Read-only w.r.t. the solver — never rebuilds a model,
//! never fails the edit, only returns warnings. Grounded in
//! `original_source/backend/solver/validators.py`; message wording is
//! preserved byte-for-byte since it is outward-facing product copy.

use chrono::{Duration, NaiveDate};
use shared::{Qualification, ShiftType};
use uuid::Uuid;

const MAX_CONSECUTIVE_WORK_DAYS: i64 = 5;

/// One persisted (member, date) -> shift_type row, as read back from
/// storage within the edit's own transaction.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentView {
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub shift_type: ShiftType,
}

/// The member attributes the checks below need; a thin projection, not
/// the full `Member` entity.
#[derive(Debug, Clone)]
pub struct MemberView {
    pub id: Uuid,
    pub name: String,
    pub qualification: Qualification,
    pub max_night_shifts: i32,
    pub min_night_shifts: i32,
}

fn shift_type_for(assignments: &[AssignmentView], member_id: Uuid, date: NaiveDate) -> Option<ShiftType> {
    assignments
        .iter()
        .find(|a| a.member_id == member_id && a.date == date)
        .map(|a| a.shift_type)
}

fn is_night(shift_type: ShiftType) -> bool {
    ShiftType::NIGHT_SHIFT_TYPES.contains(&shift_type)
}

/// H6: a night shift must be bracketed by a day off on both sides.
fn check_h6_night_rest(
    assignments: &[AssignmentView],
    member: &MemberView,
    date: NaiveDate,
) -> Vec<String> {
    let mut warnings = Vec::new();
    let today_shift = shift_type_for(assignments, member.id, date);
    let prev_shift = shift_type_for(assignments, member.id, date - Duration::days(1));
    let next_shift = shift_type_for(assignments, member.id, date + Duration::days(1));

    if prev_shift.is_some_and(is_night) && today_shift.is_some_and(|s| s != ShiftType::DayOff) {
        warnings.push(format!("{} は前日に夜勤のため、本日は公休が必要です", member.name));
    }

    if today_shift.is_some_and(is_night) && next_shift.is_some_and(|s| s != ShiftType::DayOff) {
        warnings.push(format!("{} は本日夜勤のため、翌日は公休が必要です", member.name));
    }

    warnings
}

/// H8: at least one midwife must be on every night-shift roster.
fn check_h8_night_midwife(
    assignments: &[AssignmentView],
    members: &[MemberView],
    member: &MemberView,
    date: NaiveDate,
) -> Vec<String> {
    let today_shift = shift_type_for(assignments, member.id, date);
    if !today_shift.is_some_and(is_night) {
        return Vec::new();
    }

    let has_midwife = assignments
        .iter()
        .filter(|a| a.date == date && is_night(a.shift_type))
        .filter_map(|a| members.iter().find(|m| m.id == a.member_id))
        .any(|m| m.qualification == Qualification::Midwife);

    if has_midwife {
        Vec::new()
    } else {
        vec![format!("{}/{} の夜勤に助産師が配置されていません", date.format("%m"), date.format("%d"))]
    }
}

/// H9: no more than 5 consecutive working days, counting the edited date.
fn check_h9_consecutive_work(
    assignments: &[AssignmentView],
    member: &MemberView,
    date: NaiveDate,
) -> Vec<String> {
    let works_on = |d: NaiveDate| -> bool {
        shift_type_for(assignments, member.id, d).is_some_and(|s| s != ShiftType::DayOff)
    };

    if !works_on(date) {
        return Vec::new();
    }

    let mut consecutive: i64 = 1;
    let mut d = date - Duration::days(1);
    while works_on(d) {
        consecutive += 1;
        d -= Duration::days(1);
    }
    let mut d = date + Duration::days(1);
    while works_on(d) {
        consecutive += 1;
        d += Duration::days(1);
    }

    if consecutive > MAX_CONSECUTIVE_WORK_DAYS {
        vec![format!(
            "{} の連続勤務が {} 日になっています（上限{}日）",
            member.name, consecutive, MAX_CONSECUTIVE_WORK_DAYS
        )]
    } else {
        Vec::new()
    }
}

/// H10: per-member monthly night-shift ceiling.
fn check_h10_night_limit(assignments: &[AssignmentView], member: &MemberView) -> Vec<String> {
    let night_count = assignments
        .iter()
        .filter(|a| a.member_id == member.id && is_night(a.shift_type))
        .count() as i32;

    if night_count > member.max_night_shifts {
        vec![format!(
            "{} の夜勤回数が {} 回になっています（上限{}回）",
            member.name, night_count, member.max_night_shifts
        )]
    } else {
        Vec::new()
    }
}

/// H17: per-member committed night-shift floor.
fn check_h17_night_minimum(assignments: &[AssignmentView], member: &MemberView) -> Vec<String> {
    if member.min_night_shifts <= 0 {
        return Vec::new();
    }

    let night_count = assignments
        .iter()
        .filter(|a| a.member_id == member.id && is_night(a.shift_type))
        .count() as i32;

    if night_count < member.min_night_shifts {
        vec![format!(
            "{} の夜勤回数が {} 回になっています（確定{}回）",
            member.name, night_count, member.min_night_shifts
        )]
    } else {
        Vec::new()
    }
}

/// Re-checks H6/H8/H9/H10/H17 against `assignments` (which must already
/// include the just-committed edit) for `(member_id, date)`. Returns an
/// empty vector if `member_id` is not found, matching the original's
/// silent no-op on an unknown member.
pub fn check_assignment_warnings(
    assignments: &[AssignmentView],
    members: &[MemberView],
    member_id: Uuid,
    date: NaiveDate,
) -> Vec<String> {
    let Some(member) = members.iter().find(|m| m.id == member_id) else {
        return Vec::new();
    };

    let mut warnings = Vec::new();
    warnings.extend(check_h6_night_rest(assignments, member, date));
    warnings.extend(check_h8_night_midwife(assignments, members, member, date));
    warnings.extend(check_h9_consecutive_work(assignments, member, date));
    warnings.extend(check_h10_night_limit(assignments, member));
    warnings.extend(check_h17_night_minimum(assignments, member));
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, max_nights: i32, min_nights: i32) -> MemberView {
        MemberView {
            id: Uuid::new_v4(),
            name: name.to_string(),
            qualification: Qualification::Nurse,
            max_night_shifts: max_nights,
            min_night_shifts: min_nights,
        }
    }

    #[test]
    fn night_then_non_off_day_warns() {
        let m = member("Yamada", 5, 0);
        let d1 = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        let assignments = vec![
            AssignmentView { member_id: m.id, date: d1, shift_type: ShiftType::Night },
            AssignmentView { member_id: m.id, date: d2, shift_type: ShiftType::Ward },
        ];

        let warnings = check_assignment_warnings(&assignments, &[m], assignments[0].member_id, d2);
        assert!(warnings.iter().any(|w| w.contains("前日に夜勤のため")));
    }

    #[test]
    fn night_without_midwife_warns() {
        let m = member("Sato", 5, 0);
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let assignments = vec![AssignmentView { member_id: m.id, date, shift_type: ShiftType::Night }];

        let warnings = check_assignment_warnings(&assignments, &[m.clone()], m.id, date);
        assert!(warnings.iter().any(|w| w.contains("助産師が配置されていません")));
    }

    #[test]
    fn over_ceiling_warns_and_unknown_member_is_a_no_op() {
        let m = member("Suzuki", 2, 0);
        let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let assignments: Vec<AssignmentView> = (1..=3)
            .map(|day| AssignmentView {
                member_id: m.id,
                date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
                shift_type: ShiftType::Night,
            })
            .collect();

        let warnings = check_assignment_warnings(&assignments, &[m.clone()], m.id, date);
        assert!(warnings.iter().any(|w| w.contains("上限2回")));

        assert!(check_assignment_warnings(&assignments, &[m], Uuid::new_v4(), date).is_empty());
    }
}
