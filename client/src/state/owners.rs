//! Owner management tab state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admins search owners, credit bonuses, edit accounts, and link listings
//! to owners through the assign modal. All of it is plain data driven by
//! the owners tab component.

#[cfg(test)]
#[path = "owners_test.rs"]
mod owners_test;

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::net::types::{Listing, Owner};

pub const BONUS_PRESETS: [i64; 4] = [100, 500, 1000, 5000];
pub const ALL_CITIES: &str = "all";

/// Parse the bonus input into a positive whole ruble amount.
///
/// # Errors
///
/// Returns the user-facing message for empty, non-numeric, or non-positive input.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_bonus_amount(raw: &str) -> Result<i64, &'static str> {
    let value: f64 = raw.trim().replace(',', ".").parse().map_err(|_| "Введите корректную сумму")?;
    if !value.is_finite() || value <= 0.0 {
        return Err("Введите корректную сумму");
    }
    let rounded = value.round() as i64;
    if rounded <= 0 {
        return Err("Введите корректную сумму");
    }
    Ok(rounded)
}

/// Case-insensitive owner search over name, email, phone, and login.
#[must_use]
pub fn search_owners<'a>(owners: &'a [Owner], query: &str) -> Vec<&'a Owner> {
    let query = query.trim().to_lowercase();
    owners
        .iter()
        .filter(|o| {
            query.is_empty()
                || o.full_name.to_lowercase().contains(&query)
                || o.email.to_lowercase().contains(&query)
                || o.phone.as_deref().is_some_and(|p| p.to_lowercase().contains(&query))
                || o.login.as_deref().is_some_and(|l| l.to_lowercase().contains(&query))
        })
        .collect()
}

// =============================================================================
// OWNER FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OwnerForm {
    pub email: String,
    pub login: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
}

impl OwnerForm {
    #[must_use]
    pub fn from_owner(owner: &Owner) -> Self {
        Self {
            email: owner.email.clone(),
            login: owner.login.clone().unwrap_or_default(),
            password: String::new(),
            full_name: owner.full_name.clone(),
            phone: owner.phone.clone().unwrap_or_default(),
        }
    }

    /// Password is only mandatory when creating a new owner.
    ///
    /// # Errors
    ///
    /// Returns the first missing-field message.
    pub fn validate(&self, creating: bool) -> Result<(), &'static str> {
        if self.full_name.trim().is_empty() {
            return Err("Укажите ФИО");
        }
        if self.email.trim().is_empty() {
            return Err("Укажите email");
        }
        if self.login.trim().is_empty() {
            return Err("Укажите логин");
        }
        if creating && self.password.is_empty() {
            return Err("Укажите пароль");
        }
        Ok(())
    }

    /// Request body; an empty password on edit means "keep the current one".
    #[must_use]
    pub fn payload(&self, id: Option<i64>) -> serde_json::Value {
        let mut body = serde_json::to_value(self).unwrap_or_default();
        if let Some(map) = body.as_object_mut() {
            if self.password.is_empty() {
                map.remove("password");
            }
            if let Some(id) = id {
                map.insert("id".to_owned(), serde_json::json!(id));
            }
        }
        body
    }
}

// =============================================================================
// ASSIGN LISTINGS
// =============================================================================

/// State of the "link listings to owner" modal.
#[derive(Clone, Debug)]
pub struct AssignState {
    pub owner_id: i64,
    pub listings: Vec<Listing>,
    pub query: String,
    pub city: String,
    pub selected: BTreeSet<i64>,
}

impl AssignState {
    #[must_use]
    pub fn new(owner_id: i64, listings: Vec<Listing>) -> Self {
        Self { owner_id, listings, query: String::new(), city: ALL_CITIES.to_owned(), selected: BTreeSet::new() }
    }

    #[must_use]
    pub fn filtered(&self) -> Vec<&Listing> {
        let query = self.query.trim().to_lowercase();
        self.listings
            .iter()
            .filter(|l| {
                let search = query.is_empty()
                    || l.title.to_lowercase().contains(&query)
                    || l.city.to_lowercase().contains(&query)
                    || l.district.to_lowercase().contains(&query);
                let city = self.city == ALL_CITIES || l.city == self.city;
                search && city
            })
            .collect()
    }

    /// Filtered listings that nobody owns yet; only these are selectable.
    #[must_use]
    pub fn selectable(&self) -> Vec<i64> {
        self.filtered().into_iter().filter(|l| l.owner_id.is_none()).map(|l| l.id).collect()
    }

    pub fn toggle(&mut self, listing_id: i64) {
        if !self.selected.remove(&listing_id) {
            self.selected.insert(listing_id);
        }
    }

    #[must_use]
    pub fn all_selected(&self) -> bool {
        let selectable = self.selectable();
        !selectable.is_empty() && selectable.iter().all(|id| self.selected.contains(id))
    }

    /// Select every selectable listing, or clear when all are already selected.
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.selectable().into_iter().collect();
        }
    }

    /// Listing count per city across the whole list, for the city chips.
    #[must_use]
    pub fn city_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for listing in &self.listings {
            *counts.entry(listing.city.clone()).or_insert(0) += 1;
        }
        counts
    }
}
