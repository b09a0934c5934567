use super::*;

use time::macros::datetime;

use crate::net::types::Room;
use crate::util::subscription::parse_timestamp;

const NOW: OffsetDateTime = datetime!(2025-03-01 12:00:00 UTC);

fn listing(id: i64, city: &str, kind: &str) -> Listing {
    Listing {
        id,
        city: city.to_owned(),
        kind: kind.to_owned(),
        moderation_status: ModerationStatus::Approved,
        subscription_expires_at: Some("2025-04-01T00:00:00Z".to_owned()),
        ..Listing::default()
    }
}

fn archived(id: i64, city: &str) -> Listing {
    Listing { is_archived: true, ..listing(id, city, "Отель") }
}

fn state_with(listings: Vec<Listing>) -> AdminListingsState {
    AdminListingsState { listings, ..AdminListingsState::default() }
}

fn ids(listings: &[&Listing]) -> Vec<i64> {
    listings.iter().map(|l| l.id).collect()
}

#[test]
fn merge_keeps_flagged_archived_and_sorts_desc() {
    let merged = merge_loaded(
        vec![listing(2, "Москва", "Отель"), listing(7, "Казань", "Отель")],
        vec![archived(5, "Москва"), listing(9, "Москва", "Отель")],
    );
    assert_eq!(merged.iter().map(|l| l.id).collect::<Vec<_>>(), vec![7, 5, 2]);
}

#[test]
fn default_filters_hide_archived() {
    let state = state_with(vec![listing(1, "Москва", "Отель"), archived(2, "Москва")]);
    assert_eq!(ids(&state.filtered(NOW)), vec![1]);
}

#[test]
fn city_and_type_filters_combine() {
    let mut state = state_with(vec![
        listing(1, "Москва", "Отель"),
        listing(2, "Москва", "Апартаменты"),
        listing(3, "Казань", "Отель"),
    ]);
    state.filters.city = "Москва".to_owned();
    assert_eq!(ids(&state.filtered(NOW)), vec![1, 2]);
    state.filters.kind = "Отель".to_owned();
    assert_eq!(ids(&state.filtered(NOW)), vec![1]);
    state.filters.city = ALL.to_owned();
    assert_eq!(ids(&state.filtered(NOW)), vec![1, 3]);
}

#[test]
fn archive_view_keeps_inactive_rejected_and_pending() {
    let active = listing(1, "Москва", "Отель");
    let expired = Listing { subscription_expires_at: Some("2025-02-01T00:00:00Z".to_owned()), ..listing(2, "Москва", "Отель") };
    let unpaid = Listing { subscription_expires_at: None, ..listing(3, "Москва", "Отель") };
    let rejected = Listing { moderation_status: ModerationStatus::Rejected, ..listing(4, "Москва", "Отель") };
    let pending = Listing { moderation_status: ModerationStatus::Pending, ..listing(5, "Москва", "Отель") };
    let mut state = state_with(vec![active, expired, unpaid, rejected, pending]);
    state.filters.show_archived = true;
    assert_eq!(ids(&state.filtered(NOW)), vec![2, 3, 4, 5]);
}

#[test]
fn archive_view_treats_expiry_at_now_as_inactive() {
    let boundary = Listing { subscription_expires_at: Some("2025-03-01T12:00:00Z".to_owned()), ..listing(6, "Москва", "Отель") };
    let mut state = state_with(vec![boundary]);
    state.filters.show_archived = true;
    assert_eq!(ids(&state.filtered(NOW)), vec![6]);
}

#[test]
fn huge_subscription_extension_does_not_overflow() {
    let mut state = state_with(vec![listing(1, "Москва", "Отель")]);
    state.apply_subscription(1, i64::MAX, NOW);
    assert_eq!(
        parse_timestamp(state.listings[0].subscription_expires_at.as_deref().unwrap()),
        Some(extend_from(NOW, MAX_EXTENSION_DAYS))
    );
}

#[test]
fn archive_view_includes_archived_inactive_rows() {
    let row = Listing { subscription_expires_at: None, ..archived(8, "Казань") };
    let mut state = state_with(vec![row]);
    state.filters.show_archived = true;
    assert_eq!(ids(&state.filtered(NOW)), vec![8]);
}

#[test]
fn only_unrated_checks_listing_and_rooms() {
    let rated = Listing { expert_photo_rating: Some(4.0), ..listing(1, "Москва", "Отель") };
    let room_rated = Listing {
        rooms: vec![Room { expert_fullness_rating: Some(5.0), ..Room::default() }],
        ..listing(2, "Москва", "Отель")
    };
    let zero_rated = Listing { expert_photo_rating: Some(0.0), ..listing(3, "Москва", "Отель") };
    let mut state = state_with(vec![rated, room_rated, zero_rated, listing(4, "Москва", "Отель")]);
    state.filters.only_unrated = true;
    assert_eq!(ids(&state.filtered(NOW)), vec![3, 4]);
}

#[test]
fn grouped_by_city_orders_groups_and_keeps_listing_order() {
    let state = state_with(vec![
        listing(9, "Москва", "Отель"),
        listing(8, "", "Отель"),
        listing(7, "Казань", "Отель"),
        listing(6, "Москва", "Отель"),
    ]);
    let groups = state.grouped_by_city(NOW);
    let cities: Vec<&str> = groups.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(cities, vec!["", "Казань", "Москва"]);
    assert_eq!(ids(&groups[2].1), vec![9, 6]);
}

#[test]
fn empty_state_yields_no_groups() {
    let state = AdminListingsState::default();
    assert!(state.grouped_by_city(NOW).is_empty());
    assert!(state.city_totals().is_empty());
    assert!(state.cities().is_empty());
}

#[test]
fn city_totals_ignore_filters_but_respect_archive_toggle() {
    let mut state = state_with(vec![listing(1, "Москва", "Отель"), listing(2, "Казань", "Отель"), archived(3, "Москва")]);
    state.filters.city = "Казань".to_owned();
    let totals = state.city_totals();
    assert_eq!(totals.get("Москва"), Some(&1));
    assert_eq!(totals.get("Казань"), Some(&1));
    state.filters.show_archived = true;
    assert_eq!(state.city_totals().get("Москва"), Some(&2));
}

#[test]
fn cities_are_unique_and_sorted() {
    let state = state_with(vec![listing(1, "Москва", "Отель"), listing(2, "Казань", "Хостел"), listing(3, "Москва", "Отель")]);
    assert_eq!(state.cities(), vec!["Казань".to_owned(), "Москва".to_owned()]);
    assert_eq!(state.kinds(), vec!["Отель".to_owned(), "Хостел".to_owned()]);
}

#[test]
fn local_updates_touch_only_target() {
    let mut state = state_with(vec![listing(1, "Москва", "Отель"), listing(2, "Москва", "Отель")]);
    state.apply_position(1, 3);
    state.apply_moderation(2, ModerationStatus::Rejected, Some("Нет фото".to_owned()));
    state.apply_subscription(1, 30, NOW);
    assert_eq!(state.listings[0].auction, 3);
    assert_eq!(state.listings[1].auction, Listing::default().auction);
    assert_eq!(state.listings[1].moderation_comment.as_deref(), Some("Нет фото"));
    assert_eq!(
        parse_timestamp(state.listings[0].subscription_expires_at.as_deref().unwrap()),
        Some(datetime!(2025-03-31 12:00:00 UTC))
    );
    state.set_archived(2, true);
    assert!(state.listings[1].is_archived);
    state.remove(1);
    assert_eq!(state.listings.len(), 1);
}

#[test]
fn upsert_replaces_or_prepends() {
    let mut state = state_with(vec![listing(1, "Москва", "Отель")]);
    state.upsert(Listing { title: "Новое имя".to_owned(), ..listing(1, "Москва", "Отель") });
    state.upsert(listing(9, "Казань", "Отель"));
    assert_eq!(state.listings.len(), 2);
    assert_eq!(state.listings[0].id, 9);
    assert_eq!(state.listings[1].title, "Новое имя");
}

#[test]
fn rejection_needs_a_reason() {
    assert_eq!(validate_moderation(&ModerationStatus::Rejected, "  "), Err("Укажите причину"));
    assert_eq!(validate_moderation(&ModerationStatus::NeedsChanges, ""), Err("Укажите причину"));
    assert!(validate_moderation(&ModerationStatus::Rejected, "Нет фото").is_ok());
    assert!(validate_moderation(&ModerationStatus::Approved, "").is_ok());
}

#[test]
fn dialog_number_inputs() {
    assert_eq!(parse_days(" 30 "), Ok(30));
    assert!(parse_days("0").is_err());
    assert!(parse_days("abc").is_err());
    assert_eq!(parse_days("3650"), Ok(3650));
    assert_eq!(parse_days("999999999999"), Err("Не более 3650 дней"));
    assert_eq!(parse_position("1"), Ok(1));
    assert!(parse_position("1000").is_err());
}
