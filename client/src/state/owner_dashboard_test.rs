use super::*;

use crate::net::types::SubscriptionPrices;

fn info(days_left: Option<i64>) -> SubscriptionInfo {
    SubscriptionInfo { days_left, ..SubscriptionInfo::default() }
}

#[test]
fn extension_price_prefers_quoted_package() {
    let quoted = SubscriptionInfo {
        price_per_month: Some(2000.0),
        prices: SubscriptionPrices { days_30: Some(2700.0), days_90: None },
        ..SubscriptionInfo::default()
    };
    assert_eq!(extension_price(&quoted, 30), Some(2700.0));
    assert_eq!(extension_price(&quoted, 90), Some(5100.0));
    assert_eq!(extension_price(&SubscriptionInfo::default(), 30), None);
}

#[test]
fn lookups_are_keyed_by_requested_listing() {
    let mut state = OwnerDashboardState::default();
    state.set_subscription(11, info(Some(5)));
    state.set_subscription(12, info(Some(40)));
    assert_eq!(state.subscriptions.keys().copied().collect::<Vec<_>>(), vec![11, 12]);
    assert_eq!(state.subscriptions[&11].days_left, Some(5));
}

#[test]
fn expiry_flags() {
    let listing = Listing { id: 1, ..Listing::default() };
    assert!(is_expired(&listing, Some(&info(Some(0)))));
    assert!(!is_expired(&listing, Some(&info(Some(3)))));
    assert!(is_expired(&Listing { is_archived: true, ..listing.clone() }, None));
    assert!(is_expiring_soon(Some(&info(Some(7)))));
    assert!(!is_expiring_soon(Some(&info(Some(8)))));
    assert!(!is_expiring_soon(None));
}

#[test]
fn urgency_ordering() {
    let mut state = OwnerDashboardState {
        listings: (1..=3).map(|id| Listing { id, ..Listing::default() }).collect(),
        ..OwnerDashboardState::default()
    };
    state.set_subscription(1, info(Some(40)));
    state.set_subscription(2, info(Some(0)));
    state.set_subscription(3, info(Some(2)));
    let order: Vec<i64> = state.listings_by_urgency().iter().map(|l| l.id).collect();
    assert_eq!(order, vec![2, 3, 1]);
}

#[test]
fn current_balance_uses_latest_transaction() {
    let state = OwnerDashboardState {
        transactions: vec![
            Transaction { id: 5, balance_after: Some(700.0), ..Transaction::default() },
            Transaction { id: 9, balance_after: Some(200.0), ..Transaction::default() },
        ],
        ..OwnerDashboardState::default()
    };
    assert_eq!(state.current_balance(), Some(200.0));
    assert_eq!(OwnerDashboardState::default().current_balance(), None);
}

#[test]
fn recheck_only_after_moderator_feedback() {
    let with_status = |moderation_status| Listing { id: 1, moderation_status, ..Listing::default() };
    assert!(can_request_recheck(&with_status(ModerationStatus::NeedsChanges)));
    assert!(can_request_recheck(&with_status(ModerationStatus::Rejected)));
    assert!(!can_request_recheck(&with_status(ModerationStatus::Approved)));
    assert!(!can_request_recheck(&with_status(ModerationStatus::AwaitingRecheck)));
}

#[test]
fn marking_recheck_updates_only_that_listing() {
    let mut state = OwnerDashboardState {
        listings: vec![
            Listing { id: 1, moderation_status: ModerationStatus::Rejected, ..Listing::default() },
            Listing { id: 2, moderation_status: ModerationStatus::Rejected, ..Listing::default() },
        ],
        ..OwnerDashboardState::default()
    };
    state.mark_awaiting_recheck(2);
    assert_eq!(state.listings[0].moderation_status, ModerationStatus::Rejected);
    assert_eq!(state.listings[1].moderation_status, ModerationStatus::AwaitingRecheck);
}
