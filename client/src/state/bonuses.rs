//! Employee payouts tab state.
//!
//! Employees earn a bonus per moderation or sales action; a superadmin
//! reviews them per employee and marks batches as paid out.

#[cfg(test)]
#[path = "bonuses_test.rs"]
mod bonuses_test;

use std::collections::BTreeSet;

use crate::net::types::{BonusSummary, EmployeeBonus};

#[derive(Clone, Debug, Default)]
pub struct BonusesState {
    pub summaries: Vec<BonusSummary>,
    pub admin_id: Option<i64>,
    pub include_paid: bool,
    pub bonuses: Vec<EmployeeBonus>,
    pub checked: BTreeSet<i64>,
}

impl BonusesState {
    /// Focus another employee; their bonus list is reloaded.
    pub fn select_employee(&mut self, admin_id: i64) {
        self.admin_id = Some(admin_id);
        self.bonuses.clear();
        self.checked.clear();
    }

    pub fn set_bonuses(&mut self, bonuses: Vec<EmployeeBonus>) {
        self.checked.retain(|id| bonuses.iter().any(|b| b.id == *id));
        self.bonuses = bonuses;
    }

    pub fn toggle(&mut self, bonus_id: i64) {
        if !self.checked.remove(&bonus_id) {
            self.checked.insert(bonus_id);
        }
    }

    /// Check every row in the current paid/unpaid view, or clear when all are checked.
    pub fn toggle_all(&mut self, paid: bool) {
        let ids: BTreeSet<i64> = self.bonuses.iter().filter(|b| b.is_paid == paid).map(|b| b.id).collect();
        if !ids.is_empty() && ids.is_subset(&self.checked) {
            self.checked.retain(|id| !ids.contains(id));
        } else {
            self.checked.extend(ids);
        }
    }

    /// Checked ids whose paid flag differs from `paid`, i.e. the ones the action would change.
    #[must_use]
    pub fn ids_to_mark(&self, paid: bool) -> Vec<i64> {
        self.bonuses.iter().filter(|b| b.is_paid != paid && self.checked.contains(&b.id)).map(|b| b.id).collect()
    }

    #[must_use]
    pub fn checked_total(&self) -> f64 {
        self.bonuses.iter().filter(|b| self.checked.contains(&b.id)).map(|b| b.amount).sum()
    }

    #[must_use]
    pub fn unpaid_total(&self) -> f64 {
        self.bonuses.iter().filter(|b| !b.is_paid).map(|b| b.amount).sum()
    }

    /// Apply a confirmed mark locally so the totals update before the reload.
    pub fn apply_marked(&mut self, ids: &[i64], paid: bool) {
        let mut moved = 0.0;
        for bonus in self.bonuses.iter_mut().filter(|b| ids.contains(&b.id) && b.is_paid != paid) {
            bonus.is_paid = paid;
            moved += bonus.amount;
        }
        if !self.include_paid && paid {
            self.bonuses.retain(|b| !b.is_paid);
        }
        for id in ids {
            self.checked.remove(id);
        }
        if let Some(summary) = self.admin_id.and_then(|a| self.summaries.iter_mut().find(|s| s.admin_id == a)) {
            let signed = if paid { moved } else { -moved };
            summary.total_unpaid = (summary.total_unpaid - signed).max(0.0);
            summary.total_paid = (summary.total_paid + signed).max(0.0);
        }
    }

    /// Sum still owed across all employees.
    #[must_use]
    pub fn owed_overall(&self) -> f64 {
        self.summaries.iter().map(|s| s.total_unpaid).sum()
    }
}
