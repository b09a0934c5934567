//! Owner dashboard state: own listings, subscriptions and balance history.

#[cfg(test)]
#[path = "owner_dashboard_test.rs"]
mod owner_dashboard_test;

use std::collections::BTreeMap;

use crate::net::types::{Listing, ModerationStatus, SubscriptionInfo, Transaction};

/// Subscription packages offered to owners.
pub const EXTENSION_DAYS: [i64; 2] = [30, 90];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OwnerTab {
    #[default]
    Overview,
    Subscriptions,
    Promotion,
    Statistics,
    Transactions,
}

impl OwnerTab {
    pub const ALL: [Self; 5] = [Self::Overview, Self::Subscriptions, Self::Promotion, Self::Statistics, Self::Transactions];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Мои объекты",
            Self::Subscriptions => "Подписка",
            Self::Promotion => "Продвижение",
            Self::Statistics => "Статистика",
            Self::Transactions => "История операций",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct OwnerDashboardState {
    pub tab: OwnerTab,
    pub listings: Vec<Listing>,
    pub subscriptions: BTreeMap<i64, SubscriptionInfo>,
    pub transactions: Vec<Transaction>,
    pub loading: bool,
}

/// Discount the remote applies to the 90-day package.
pub const DISCOUNT_90_DAYS: f64 = 0.15;

/// Package price: the quoted price when present, else derived from the monthly rate.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn extension_price(info: &SubscriptionInfo, days: i64) -> Option<f64> {
    let quoted = match days {
        30 => info.prices.days_30,
        90 => info.prices.days_90,
        _ => None,
    };
    quoted.or_else(|| {
        info.price_per_month.map(|monthly| match days {
            30 => monthly,
            90 => (monthly * 3.0 * (1.0 - DISCOUNT_90_DAYS)).floor(),
            _ => monthly * days as f64 / 30.0,
        })
    })
}

#[must_use]
pub fn is_expired(listing: &Listing, info: Option<&SubscriptionInfo>) -> bool {
    listing.is_archived || info.and_then(|i| i.days_left) == Some(0)
}

#[must_use]
pub fn is_expiring_soon(info: Option<&SubscriptionInfo>) -> bool {
    info.and_then(|i| i.days_left).is_some_and(|d| d <= 7)
}

/// Owners may resubmit a listing the moderator sent back.
#[must_use]
pub fn can_request_recheck(listing: &Listing) -> bool {
    matches!(listing.moderation_status, ModerationStatus::NeedsChanges | ModerationStatus::Rejected)
}

impl OwnerDashboardState {
    /// Balance after the most recent transaction.
    #[must_use]
    pub fn current_balance(&self) -> Option<f64> {
        self.transactions.iter().max_by_key(|t| t.id).and_then(|t| t.balance_after)
    }

    /// Record the resubmission locally until the next reload.
    pub fn mark_awaiting_recheck(&mut self, listing_id: i64) {
        if let Some(listing) = self.listings.iter_mut().find(|l| l.id == listing_id) {
            listing.moderation_status = ModerationStatus::AwaitingRecheck;
        }
    }

    /// Store a lookup under the listing it was requested for.
    pub fn set_subscription(&mut self, listing_id: i64, info: SubscriptionInfo) {
        self.subscriptions.insert(listing_id, info);
    }

    /// Listings that need attention first: expired, then expiring, then the rest.
    #[must_use]
    pub fn listings_by_urgency(&self) -> Vec<&Listing> {
        let mut out: Vec<&Listing> = self.listings.iter().collect();
        out.sort_by_key(|l| {
            let info = self.subscriptions.get(&l.id);
            let rank = if is_expired(l, info) {
                0
            } else if is_expiring_soon(info) {
                1
            } else {
                2
            };
            (rank, l.id)
        });
        out
    }
}
