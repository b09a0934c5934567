//! Admin listings state: loading, filtering, and grouping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The back office loads the whole inventory (active plus archived) once
//! and filters it locally. The admin panel renders `grouped_by_city` and
//! uses `city_totals` for the filter chips.
//!
//! DESIGN
//! ======
//! Mutations are applied here only after the corresponding remote call
//! succeeded; the remote stays the source of truth and a reload replaces
//! everything.

#[cfg(test)]
#[path = "admin_listings_test.rs"]
mod admin_listings_test;

use std::collections::{BTreeMap, BTreeSet};

use time::OffsetDateTime;

use crate::net::types::{Listing, ModerationStatus};
use crate::util::subscription::{MAX_EXTENSION_DAYS, extend_from, is_inactive, to_rfc3339};

/// Filter value meaning "no restriction".
pub const ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingFilters {
    pub city: String,
    pub kind: String,
    pub show_archived: bool,
    pub only_unrated: bool,
}

impl Default for ListingFilters {
    fn default() -> Self {
        Self { city: ALL.to_owned(), kind: ALL.to_owned(), show_archived: false, only_unrated: false }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AdminListingsState {
    pub listings: Vec<Listing>,
    pub loading: bool,
    pub filters: ListingFilters,
}

/// Combine the two admin queries: the active list plus the archived rows
/// actually flagged as archived, newest id first.
#[must_use]
pub fn merge_loaded(active: Vec<Listing>, archived: Vec<Listing>) -> Vec<Listing> {
    let mut all = active;
    all.extend(archived.into_iter().filter(|l| l.is_archived));
    all.sort_by(|a, b| b.id.cmp(&a.id));
    all
}

impl AdminListingsState {
    pub fn set_loaded(&mut self, active: Vec<Listing>, archived: Vec<Listing>) {
        self.listings = merge_loaded(active, archived);
        self.loading = false;
    }

    /// Unique cities, ascending.
    #[must_use]
    pub fn cities(&self) -> Vec<String> {
        self.listings.iter().map(|l| l.city.clone()).collect::<BTreeSet<_>>().into_iter().collect()
    }

    /// Unique listing types, ascending.
    #[must_use]
    pub fn kinds(&self) -> Vec<String> {
        self.listings
            .iter()
            .map(|l| l.kind.clone())
            .filter(|k| !k.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn matches(&self, listing: &Listing, now: OffsetDateTime) -> bool {
        let filters = &self.filters;
        if filters.show_archived {
            let inactive = is_inactive(listing.subscription_expires_at.as_deref(), now);
            let rejected = listing.moderation_status == ModerationStatus::Rejected;
            let pending = listing.moderation_status == ModerationStatus::Pending;
            if !inactive && !rejected && !pending {
                return false;
            }
        } else if listing.is_archived {
            return false;
        }

        let city_match = filters.city == ALL || listing.city == filters.city;
        let kind_match = filters.kind == ALL || listing.kind == filters.kind;
        let rated_match = !filters.only_unrated || !listing.has_expert_rating();
        city_match && kind_match && rated_match
    }

    #[must_use]
    pub fn filtered(&self, now: OffsetDateTime) -> Vec<&Listing> {
        self.listings.iter().filter(|l| self.matches(l, now)).collect()
    }

    /// Filtered listings grouped by city; groups ordered by city name.
    #[must_use]
    pub fn grouped_by_city(&self, now: OffsetDateTime) -> Vec<(String, Vec<&Listing>)> {
        let mut groups: BTreeMap<String, Vec<&Listing>> = BTreeMap::new();
        for listing in self.filtered(now) {
            groups.entry(listing.city.clone()).or_default().push(listing);
        }
        groups.into_iter().collect()
    }

    /// Listing count per city, ignoring the city/type filters.
    #[must_use]
    pub fn city_totals(&self) -> BTreeMap<String, usize> {
        let mut totals = BTreeMap::new();
        for listing in &self.listings {
            if !self.filters.show_archived && listing.is_archived {
                continue;
            }
            *totals.entry(listing.city.clone()).or_insert(0) += 1;
        }
        totals
    }

    fn find_mut(&mut self, id: i64) -> Option<&mut Listing> {
        self.listings.iter_mut().find(|l| l.id == id)
    }

    pub fn apply_position(&mut self, id: i64, position: i64) {
        if let Some(listing) = self.find_mut(id) {
            listing.auction = position;
        }
    }

    pub fn apply_moderation(&mut self, id: i64, status: ModerationStatus, comment: Option<String>) {
        if let Some(listing) = self.find_mut(id) {
            listing.moderation_status = status;
            listing.moderation_comment = comment;
        }
    }

    /// New expiry is `now + days`, matching what the remote grants.
    pub fn apply_subscription(&mut self, id: i64, days: i64, now: OffsetDateTime) {
        if let Some(listing) = self.find_mut(id) {
            listing.subscription_expires_at = Some(to_rfc3339(extend_from(now, days)));
        }
    }

    pub fn set_archived(&mut self, id: i64, archived: bool) {
        if let Some(listing) = self.find_mut(id) {
            listing.is_archived = archived;
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.listings.retain(|l| l.id != id);
    }

    /// Replace the listing with the same id, or add it at the top.
    pub fn upsert(&mut self, listing: Listing) {
        match self.find_mut(listing.id) {
            Some(slot) => *slot = listing,
            None => self.listings.insert(0, listing),
        }
    }
}

// =============================================================================
// DIALOG INPUT
// =============================================================================

/// Subscription lengths offered as one-click shortcuts.
pub const SUBSCRIPTION_SHORTCUTS: [i64; 3] = [30, 90, 365];

/// Rejections and change requests must tell the owner why.
///
/// # Errors
///
/// Returns the user-facing message when the comment is missing.
pub fn validate_moderation(status: &ModerationStatus, comment: &str) -> Result<(), &'static str> {
    let needs_comment = matches!(status, ModerationStatus::Rejected | ModerationStatus::NeedsChanges);
    if needs_comment && comment.trim().is_empty() {
        return Err("Укажите причину");
    }
    Ok(())
}

/// # Errors
///
/// Returns the user-facing message for anything outside `1..=MAX_EXTENSION_DAYS`.
pub fn parse_days(raw: &str) -> Result<i64, &'static str> {
    match raw.trim().parse::<i64>() {
        Ok(days) if (1..=MAX_EXTENSION_DAYS).contains(&days) => Ok(days),
        Ok(days) if days > MAX_EXTENSION_DAYS => Err("Не более 3650 дней"),
        _ => Err("Введите количество дней"),
    }
}

/// # Errors
///
/// Returns the user-facing message for anything but a position in 1..=999.
pub fn parse_position(raw: &str) -> Result<i64, &'static str> {
    match raw.trim().parse::<i64>() {
        Ok(position) if (1..=999).contains(&position) => Ok(position),
        _ => Err("Позиция от 1 до 999"),
    }
}
