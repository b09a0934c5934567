//! Owner promotion tab: TOP-20 slot booking and auction bids.
//!
//! DESIGN
//! ======
//! Both markets are per city and the remote enforces every rule again, so
//! checks here only spare the owner a round trip that is certain to fail.
//! TOP-20 slots are fixed-price for 30 days; auction bids must beat the
//! current holder of the target position by `BID_STEP`.

#[cfg(test)]
#[path = "promotion_test.rs"]
mod promotion_test;

use time::OffsetDateTime;

use crate::net::types::{AuctionEntry, AuctionInfo, Listing, Top20Position};
use crate::util::subscription::parse_timestamp;

/// A TOP-20 slot needs this many subscription days left to be bought.
pub const TOP20_MIN_SUBSCRIPTION_DAYS: i64 = 30;

/// Opening bid for a position nobody holds.
pub const AUCTION_MIN_BID: i64 = 20;

/// How much a new bid must exceed the current one.
pub const BID_STEP: i64 = 5;

/// Full days of subscription left, rounded down; 0 when missing or expired.
#[must_use]
pub fn full_days_left(expires_at: Option<&str>, now: OffsetDateTime) -> i64 {
    expires_at.and_then(parse_timestamp).map_or(0, |expires| (expires - now).whole_days().max(0))
}

/// Whether the listing may buy a TOP-20 slot.
///
/// # Errors
///
/// Returns the message shown to the owner.
pub fn top20_eligibility(listing: &Listing, now: OffsetDateTime) -> Result<(), String> {
    let days = full_days_left(listing.subscription_expires_at.as_deref(), now);
    if days < TOP20_MIN_SUBSCRIPTION_DAYS {
        return Err(format!(
            "У вас осталось {days} дней подписки. Для покупки ТОП-20 нужно минимум {TOP20_MIN_SUBSCRIPTION_DAYS} дней активной подписки."
        ));
    }
    Ok(())
}

/// Whether the selected listing already holds this slot.
#[must_use]
pub fn holds_slot(position: &Top20Position, listing_id: i64) -> bool {
    position.booking_info.as_ref().is_some_and(|b| b.listing_id == listing_id)
}

/// Active bid currently holding `target_position`, if any.
#[must_use]
pub fn leading_bid(info: &AuctionInfo, target_position: i64) -> Option<&AuctionEntry> {
    info.listings
        .iter()
        .filter(|e| e.target_position == Some(target_position) && e.bid_amount.is_some())
        .max_by(|a, b| a.bid_amount.unwrap_or_default().total_cmp(&b.bid_amount.unwrap_or_default()))
}

/// Smallest bid the remote will accept for `target_position`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn min_bid(info: &AuctionInfo, target_position: i64) -> i64 {
    match leading_bid(info, target_position).and_then(|e| e.bid_amount) {
        Some(amount) => amount.ceil() as i64 + BID_STEP,
        None => AUCTION_MIN_BID,
    }
}

/// Parse a typed bid amount against the current minimum.
///
/// # Errors
///
/// Returns the message shown under the input.
pub fn parse_bid(raw: &str, minimum: i64) -> Result<i64, String> {
    match raw.trim().parse::<i64>() {
        Ok(amount) if amount >= minimum => Ok(amount),
        Ok(amount) if amount > 0 => Err(format!("Минимальная ставка: {minimum} ₽")),
        _ => Err("Введите сумму ставки".to_owned()),
    }
}

/// Positions an owner may bid for: the top of the city ranking.
#[must_use]
pub fn biddable_positions(info: &AuctionInfo) -> Vec<i64> {
    let slots = i64::try_from(info.listings.len()).unwrap_or(i64::MAX).clamp(1, 20);
    (1..=slots).collect()
}

#[derive(Clone, Debug, Default)]
pub struct PromotionState {
    pub listing_id: Option<i64>,
    pub top20: Vec<Top20Position>,
    pub auction: Option<AuctionInfo>,
    /// Slot being booked, for the per-row spinner.
    pub pending_position: Option<i64>,
    pub bid_position: i64,
    pub bid_input: String,
}

impl PromotionState {
    /// Switch to another listing; market data of the old city is dropped.
    pub fn select_listing(&mut self, listing_id: i64) -> bool {
        if self.listing_id == Some(listing_id) {
            return false;
        }
        self.listing_id = Some(listing_id);
        self.top20.clear();
        self.auction = None;
        self.pending_position = None;
        self.bid_position = 1;
        self.bid_input.clear();
        true
    }

    /// Selected listing, or the first one when nothing is selected yet.
    #[must_use]
    pub fn selected<'a>(&self, listings: &'a [Listing]) -> Option<&'a Listing> {
        match self.listing_id {
            Some(id) => listings.iter().find(|l| l.id == id),
            None => listings.first(),
        }
    }

    /// Where the listing stands in the loaded auction ranking.
    #[must_use]
    pub fn current_rank(&self) -> Option<i64> {
        let id = self.listing_id?;
        self.auction.as_ref()?.listings.iter().find(|e| e.id == id).map(|e| e.current_position)
    }
}
