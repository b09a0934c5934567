use super::*;

fn bonus(id: i64, amount: f64, is_paid: bool) -> EmployeeBonus {
    EmployeeBonus { id, amount, is_paid, admin_id: Some(2), ..EmployeeBonus::default() }
}

fn state() -> BonusesState {
    let mut s = BonusesState {
        summaries: vec![
            BonusSummary { admin_id: 2, total_unpaid: 300.0, total_paid: 100.0, ..BonusSummary::default() },
            BonusSummary { admin_id: 3, total_unpaid: 50.0, ..BonusSummary::default() },
        ],
        include_paid: true,
        ..BonusesState::default()
    };
    s.select_employee(2);
    s.set_bonuses(vec![bonus(1, 100.0, false), bonus(2, 200.0, false), bonus(3, 100.0, true)]);
    s
}

#[test]
fn toggle_flips_single_rows() {
    let mut s = state();
    s.toggle(1);
    s.toggle(2);
    s.toggle(1);
    assert_eq!(s.checked.iter().copied().collect::<Vec<_>>(), vec![2]);
    assert!((s.checked_total() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn toggle_all_selects_then_clears_unpaid_rows() {
    let mut s = state();
    s.toggle_all(false);
    assert_eq!(s.checked.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    s.toggle_all(false);
    assert!(s.checked.is_empty());
}

#[test]
fn ids_to_mark_skip_rows_already_in_target_state() {
    let mut s = state();
    s.toggle(1);
    s.toggle(3);
    assert_eq!(s.ids_to_mark(true), vec![1]);
    assert_eq!(s.ids_to_mark(false), vec![3]);
}

#[test]
fn marking_paid_moves_totals() {
    let mut s = state();
    s.toggle(2);
    let ids = s.ids_to_mark(true);
    s.apply_marked(&ids, true);
    assert!(s.checked.is_empty());
    assert!((s.unpaid_total() - 100.0).abs() < f64::EPSILON);
    assert!((s.summaries[0].total_unpaid - 100.0).abs() < f64::EPSILON);
    assert!((s.summaries[0].total_paid - 300.0).abs() < f64::EPSILON);
    assert!((s.owed_overall() - 150.0).abs() < f64::EPSILON);
}

#[test]
fn unpaid_view_drops_rows_once_paid() {
    let mut s = state();
    s.include_paid = false;
    s.apply_marked(&[1], true);
    assert_eq!(s.bonuses.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn reverting_a_payout_restores_debt() {
    let mut s = state();
    s.apply_marked(&[3], false);
    assert!((s.summaries[0].total_unpaid - 400.0).abs() < f64::EPSILON);
    assert!((s.summaries[0].total_paid - 0.0).abs() < f64::EPSILON);
}

#[test]
fn reload_keeps_only_visible_checks() {
    let mut s = state();
    s.toggle(1);
    s.toggle(2);
    s.set_bonuses(vec![bonus(2, 200.0, false)]);
    assert_eq!(s.checked.iter().copied().collect::<Vec<_>>(), vec![2]);
    s.select_employee(3);
    assert!(s.checked.is_empty() && s.bonuses.is_empty());
}
