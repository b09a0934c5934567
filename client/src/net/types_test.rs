use super::*;

use serde_json::json;

#[test]
fn listing_decodes_sparse_admin_row() {
    let raw = serde_json::json!({
        "id": 42,
        "title": "Отель «Арбат»",
        "type": "Отель/Гостиница",
        "city": "Москва",
        "district": null,
        "price": 2500,
        "rating": "4.80",
        "lat": "55.7522",
        "lng": 37.6156,
        "images": null,
        "moderation_status": "needs_changes",
        "subscription_expires_at": "2025-03-01 12:00:00"
    });
    let listing: Listing = serde_json::from_value(raw).unwrap();
    assert_eq!(listing.id, 42);
    assert_eq!(listing.kind, "Отель/Гостиница");
    assert_eq!(listing.district, "");
    assert!(listing.images.is_empty());
    assert_eq!(listing.rating, Some(4.8));
    assert_eq!(listing.coordinates(), Some((55.7522, 37.6156)));
    assert_eq!(listing.auction, UNPLACED_POSITION);
    assert_eq!(listing.moderation_status, ModerationStatus::NeedsChanges);
}

#[test]
fn listing_auction_null_means_unplaced() {
    let listing: Listing = serde_json::from_value(serde_json::json!({ "id": 1, "auction": null })).unwrap();
    assert_eq!(listing.auction, UNPLACED_POSITION);
}

#[test]
fn moderation_status_keeps_unknown_strings() {
    let status: ModerationStatus = serde_json::from_value(serde_json::json!("frozen")).unwrap();
    assert_eq!(status, ModerationStatus::Other("frozen".to_owned()));
    assert_eq!(status.as_str(), "frozen");
    assert_eq!(serde_json::to_value(&status).unwrap(), serde_json::json!("frozen"));
}

#[test]
fn moderation_status_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(ModerationStatus::AwaitingRecheck).unwrap(),
        serde_json::json!("awaiting_recheck")
    );
}

#[test]
fn cover_image_falls_back_to_gallery() {
    let mut listing = Listing { images: vec!["a.jpg".to_owned(), "b.jpg".to_owned()], ..Listing::default() };
    assert_eq!(listing.cover_image(), Some("a.jpg"));
    listing.image_url = Some(String::new());
    assert_eq!(listing.cover_image(), Some("a.jpg"));
    listing.image_url = Some("cover.jpg".to_owned());
    assert_eq!(listing.cover_image(), Some("cover.jpg"));
}

#[test]
fn min_price_prefers_cheapest_priced_room() {
    let listing = Listing {
        price: 3000,
        rooms: vec![
            Room { price: 0, ..Room::default() },
            Room { price: 2200, ..Room::default() },
            Room { price: 2900, ..Room::default() },
        ],
        ..Listing::default()
    };
    assert_eq!(listing.min_price(), 2200);
    assert_eq!(Listing { price: 1800, ..Listing::default() }.min_price(), 1800);
}

#[test]
fn expert_rating_detected_on_rooms() {
    let mut listing = Listing { rooms: vec![Room::default()], ..Listing::default() };
    assert!(!listing.has_expert_rating());
    listing.rooms[0].expert_fullness_rating = Some(3.0);
    assert!(listing.has_expert_rating());
}

#[test]
fn permission_set_reads_remote_map() {
    let set: PermissionSet =
        serde_json::from_value(serde_json::json!({ "owners": true, "listings": false, "settings": true, "unknown": true }))
            .unwrap();
    assert!(set.contains(Permission::Owners));
    assert!(!set.contains(Permission::Listings));
    assert!(set.contains(Permission::Settings));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![Permission::Owners, Permission::Settings]);
}

#[test]
fn permission_set_writes_every_key() {
    let mut set = PermissionSet::default();
    set.insert(Permission::Settings);
    let value = serde_json::to_value(set).unwrap();
    assert_eq!(value, serde_json::json!({ "listings": false, "owners": false, "settings": true }));
}

#[test]
fn permission_set_toggle_and_remove() {
    let mut set = PermissionSet::default();
    set.toggle(Permission::Listings);
    assert!(set.contains(Permission::Listings));
    set.toggle(Permission::Listings);
    assert!(set.is_empty());
    set.insert(Permission::Owners);
    set.remove(Permission::Owners);
    assert!(set.is_empty());
}

#[test]
fn owner_balances_accept_decimal_strings() {
    let owner: Owner = serde_json::from_value(serde_json::json!({
        "id": 7,
        "full_name": "Иван",
        "balance": "1500.50",
        "bonus_balance": 200
    }))
    .unwrap();
    assert!((owner.balance - 1500.5).abs() < f64::EPSILON);
    assert!((owner.bonus_balance - 200.0).abs() < f64::EPSILON);
}

#[test]
fn admin_claims_accept_employee_id_alias() {
    let claims: AdminClaims = serde_json::from_value(serde_json::json!({
        "employee_id": 3,
        "role": "superadmin",
        "permissions": { "owners": true }
    }))
    .unwrap();
    assert_eq!(claims.admin_id, Some(3));
    assert_eq!(claims.role, Role::Superadmin);
    assert_eq!(claims.permissions.get("owners"), Some(&true));
}

#[test]
fn admin_claims_decode_auth_token_payload() {
    let claims: AdminClaims = serde_json::from_value(serde_json::json!({
        "admin_id": 5,
        "email": "staff@120minut.ru",
        "name": "Ольга",
        "role": "employee",
        "permissions": null,
        "exp": 1_767_225_600
    }))
    .unwrap();
    assert_eq!(claims.admin_id, Some(5));
    assert_eq!(claims.full_name.as_deref(), Some("Ольга"));
    assert!(claims.permissions.is_empty());
    assert_eq!(claims.exp, Some(1_767_225_600));
}

#[test]
fn employee_row_reads_name_column() {
    let rows: Vec<Employee> = serde_json::from_value(serde_json::json!([{
        "id": 4,
        "email": "maria@120minut.ru",
        "name": "Мария",
        "role": "employee",
        "permissions": { "owners": false, "listings": true, "settings": false },
        "is_active": true,
        "created_at": "2025-01-10 09:30:00.123456",
        "last_login": null,
        "login": null
    }]))
    .unwrap();
    assert_eq!(rows[0].full_name, "Мария");
    assert!(rows[0].permissions.contains(Permission::Listings));
    assert!(!rows[0].permissions.contains(Permission::Owners));
}

#[test]
fn subscription_lookup_reads_nested_listing() {
    let info: SubscriptionInfo = serde_json::from_value(serde_json::json!({
        "listing": {
            "id": 11,
            "title": "Отель «Тверская»",
            "type": "hotel",
            "subscription_expires_at": "2025-03-01 12:00:00.250000",
            "is_archived": false,
            "image_url": null,
            "city": "Москва",
            "district": "ЦАО"
        },
        "days_left": 12,
        "price_per_month": 2000,
        "prices": { "30_days": 2000, "90_days": 5100 }
    }))
    .unwrap();
    assert_eq!(info.listing.id, 11);
    assert_eq!(info.expires_at(), Some("2025-03-01 12:00:00.250000"));
    assert_eq!(info.days_left, Some(12));
    assert_eq!(info.price_per_month, Some(2000.0));
    assert_eq!(info.prices.days_90, Some(5100.0));
}

#[test]
fn subscription_lookup_without_expiry() {
    let info: SubscriptionInfo = serde_json::from_value(serde_json::json!({
        "listing": { "id": 3, "subscription_expires_at": null },
        "days_left": null,
        "price_per_month": 1500,
        "prices": { "30_days": 1500, "90_days": 3825 }
    }))
    .unwrap();
    assert_eq!(info.expires_at(), None);
    assert_eq!(info.days_left, None);
}

#[test]
fn transactions_envelope_decodes() {
    let response: TransactionsResponse = serde_json::from_value(serde_json::json!({
        "transactions": [
            {
                "id": 21,
                "amount": "-2000.00",
                "type": "subscription",
                "description": "Продление подписки на 30 дней",
                "balance_after": "3000.00",
                "created_at": "2025-02-01T10:00:00",
                "related_bid_id": null
            },
            {
                "id": 20,
                "amount": 5000,
                "type": "deposit",
                "description": null,
                "balance_after": 5000,
                "created_at": null,
                "related_bid_id": null
            }
        ]
    }))
    .unwrap();
    assert_eq!(response.transactions.len(), 2);
    assert_eq!(response.transactions[0].kind, "subscription");
    assert_eq!(response.transactions[0].amount, -2000.0);
    assert_eq!(response.transactions[1].balance_after, Some(5000.0));
}

#[test]
fn owner_auth_response_becomes_session() {
    let response: OwnerAuthResponse = serde_json::from_value(serde_json::json!({
        "token": "Yp3k-token",
        "owner": {
            "id": 7,
            "email": "ivan@mail.ru",
            "full_name": "Иван",
            "balance": "0.00",
            "bonus_balance": "100.00",
            "phone": "+79990001122"
        }
    }))
    .unwrap();
    let session = response.into_session().unwrap();
    assert_eq!(session, OwnerSession { token: "Yp3k-token".to_owned(), owner_id: 7, full_name: "Иван".to_owned() });
}

#[test]
fn owner_auth_response_surfaces_remote_error() {
    let rejected: OwnerAuthResponse =
        serde_json::from_value(serde_json::json!({ "error": "Неверный email или пароль" })).unwrap();
    assert_eq!(rejected.into_session(), Err("Неверный email или пароль".to_owned()));
    let partial = OwnerAuthResponse { token: Some("t".to_owned()), ..OwnerAuthResponse::default() };
    assert!(partial.into_session().is_err());
}

#[test]
fn auction_ranking_decodes() {
    let info: AuctionInfo = serde_json::from_value(json!({
        "listings": [
            { "id": 4, "title": "Отель А", "current_position": 1, "bid_amount": 55, "target_position": 1, "owner_name": "Иван" },
            { "id": 9, "title": "Отель Б", "current_position": null, "bid_amount": null, "target_position": null, "owner_name": null }
        ],
        "min_bid_for_top": 60
    }))
    .unwrap();
    assert_eq!(info.listings[0].bid_amount, Some(55.0));
    assert_eq!(info.listings[1].current_position, UNPLACED_POSITION);
    assert_eq!(info.min_bid_for_top, Some(60.0));
}

#[test]
fn listing_stats_decode() {
    let stats: ListingStats = serde_json::from_value(json!({
        "stats": [{ "date": "2025-03-02", "views": 12, "clicks": 3, "phone_clicks": 2, "telegram_clicks": 1 }],
        "summary": { "total_views": 12, "total_clicks": 3, "phone_clicks": 2, "telegram_clicks": 1, "ctr": 25.0, "period_days": 30 }
    }))
    .unwrap();
    assert_eq!(stats.stats[0].phone_clicks, 2);
    assert_eq!(stats.summary.period_days, 30);
    assert!((stats.summary.ctr - 25.0).abs() < f64::EPSILON);
}

#[test]
fn top20_booking_receipt_decodes() {
    let receipt: Top20Receipt = serde_json::from_value(json!({
        "success": true,
        "message": "Позиция #3 успешно забронирована на 30 дней",
        "booking_id": 17,
        "new_balance": 400.0,
        "new_bonus_balance": 0.0
    }))
    .unwrap();
    assert_eq!(receipt.booking_id, Some(17));
    assert_eq!(receipt.new_balance, Some(400.0));
}

#[test]
fn bonus_rows_accept_name_aliases() {
    let summary: BonusSummary =
        serde_json::from_value(json!({ "id": 3, "name": "Ольга", "unpaid_amount": "150.00", "total_paid": 50 })).unwrap();
    assert_eq!(summary.admin_id, 3);
    assert_eq!(summary.full_name, "Ольга");
    assert!((summary.total_unpaid - 150.0).abs() < f64::EPSILON);

    let bonus: EmployeeBonus =
        serde_json::from_value(json!({ "id": 8, "amount": 100, "action": "moderation_approve", "is_paid": null })).unwrap();
    assert_eq!(bonus.action_type, "moderation_approve");
    assert!(!bonus.is_paid);
}
