use super::*;

#[test]
fn service_url_without_query() {
    assert_eq!(service_url(Service::PublicListings, &[]), "/api/public-listings");
    assert_eq!(service_url(Service::ListingSubmission, &[]), "/api/owner-listing-submission");
}

#[test]
fn service_url_percent_encodes_city() {
    let url = service_url(Service::Top20, &[("city", "Нижний Новгород".to_owned())]);
    assert!(url.starts_with("/api/top20?city="));
    assert!(!url.contains(' '));
    assert!(url.contains("%D0%9D"));
}

#[test]
fn listings_query_marks_archived_only_when_requested() {
    assert_eq!(
        listings_query(false, 1000, 0),
        vec![("limit", "1000".to_owned()), ("offset", "0".to_owned())]
    );
    assert_eq!(listings_query(true, 50, 100)[0], ("archived", "true".to_owned()));
    assert_eq!(
        service_url(Service::AdminListings, &listings_query(true, 10, 0)),
        "/api/admin-listings?archived=true&limit=10&offset=0"
    );
}

#[test]
fn error_message_prefers_remote_error_field() {
    assert_eq!(error_message(403, r#"{"error":"Нет доступа"}"#), "Нет доступа");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(500, "<html>oops</html>"), "HTTP 500");
    assert_eq!(error_message(400, r#"{"error":"  "}"#), "HTTP 400");
    assert_eq!(error_message(502, ""), "HTTP 502");
}

#[test]
fn decode_payload_rejects_error_envelope() {
    let result: Result<Value, String> = decode_payload(json!({ "error": "Недостаточно средств" }));
    assert_eq!(result, Err("Недостаточно средств".to_owned()));
}

#[test]
fn decode_payload_reads_typed_body() {
    let listings: Vec<Listing> = decode_payload(json!([{ "id": 3, "title": "A" }])).unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].title, "A");
}

#[test]
fn decode_payload_reports_shape_mismatch() {
    let result: Result<Vec<Listing>, String> = decode_payload(json!({ "items": [] }));
    assert!(result.unwrap_err().starts_with("unexpected response"));
}

#[test]
fn owner_update_body_flattens_fields_next_to_listing_id() {
    let body = owner_update_body(9, &json!({ "phone": "+7 900", "price": 2000 }));
    assert_eq!(body, json!({ "listing_id": 9, "phone": "+7 900", "price": 2000 }));
}

#[test]
fn upload_body_uses_camel_case_content_type() {
    let body = serde_json::to_value(UploadBody { image: "data:image/png;base64,AA==", content_type: "image/png", filename: "a.png" })
        .unwrap();
    assert_eq!(body["contentType"], "image/png");
    assert_eq!(body["filename"], "a.png");
}

#[test]
fn auth_header_names() {
    assert_eq!(AuthHeader::Standard.name(), "Authorization");
    assert_eq!(AuthHeader::Extended.name(), "X-Authorization");
    assert_eq!(Auth::standard("t").unwrap().value(), "Bearer t");
    assert_eq!(Auth::extended("t").map(|a| a.header), Some(AuthHeader::Extended));
}

#[test]
fn empty_token_sends_no_auth_header() {
    assert_eq!(Auth::standard(""), None);
    assert_eq!(Auth::extended(""), None);
}

#[test]
fn click_kind_wire_names() {
    assert_eq!(ClickKind::Phone.as_str(), "phone");
    assert_eq!(ClickKind::Telegram.as_str(), "telegram");
}

#[test]
fn service_names_round_trip_through_path_segment() {
    for service in Service::ALL {
        assert_eq!(Service::from_name(service.name()), Some(service));
    }
    assert_eq!(Service::from_name("owner-listing-submission"), Some(Service::ListingSubmission));
    assert_eq!(Service::from_name("billing"), None);
}

#[test]
fn every_service_has_a_function_id() {
    for service in Service::ALL {
        assert_eq!(service.function_id().len(), 36, "{}", service.name());
    }
    assert_eq!(Service::from_name("employee-bonuses"), Some(Service::EmployeeBonuses));
    assert_eq!(Service::Auction.function_id(), "8e5ad1a2-e9bb-462c-baba-212ad26ae9a7");
}

#[test]
fn bid_body_carries_action_and_amount() {
    let bid = Bid { owner_id: 4, listing_id: 12, city: "Москва".to_owned(), target_position: 1, bid_amount: 25 };
    assert_eq!(
        bid_body(&bid),
        json!({
            "action": "place_bid",
            "owner_id": 4,
            "listing_id": 12,
            "city": "Москва",
            "target_position": 1,
            "bid_amount": 25,
        })
    );
}

#[test]
fn mark_bonuses_body_picks_action() {
    assert_eq!(mark_bonuses_body(&[3, 5], true), json!({ "action": "mark_paid", "bonus_ids": [3, 5] }));
    assert_eq!(mark_bonuses_body(&[3], false)["action"], "mark_unpaid");
}

#[test]
fn rows_in_accepts_bare_array_or_envelope() {
    let bare: Vec<Listing> = rows_in(json!([{ "id": 1 }]), "items").unwrap();
    assert_eq!(bare.len(), 1);
    let wrapped: Vec<Listing> = rows_in(json!({ "items": [{ "id": 1 }, { "id": 2 }] }), "items").unwrap();
    assert_eq!(wrapped.len(), 2);
    let missing: Vec<Listing> = rows_in(json!({ "total": 0 }), "items").unwrap();
    assert!(missing.is_empty());
    assert!(rows_in::<Listing>(json!("oops"), "items").is_err());
}
