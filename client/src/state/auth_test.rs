use super::*;

fn token_for(payload: &serde_json::Value) -> String {
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap());
    format!("eyJhbGciOiJIUzI1NiJ9.{body}.signature")
}

#[test]
fn decode_claims_reads_payload_segment() {
    let token = token_for(&serde_json::json!({ "admin_id": 5, "email": "a@b.ru", "role": "employee" }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.admin_id, Some(5));
    assert_eq!(claims.email.as_deref(), Some("a@b.ru"));
}

#[test]
fn decode_claims_tolerates_padding() {
    let token = format!("{}==", token_for(&serde_json::json!({ "id": 1 })).trim_end_matches(".signature"));
    assert_eq!(decode_claims(&token).unwrap().admin_id, Some(1));
}

#[test]
fn decode_claims_rejects_garbage() {
    assert_eq!(decode_claims("not-a-jwt"), None);
    assert_eq!(decode_claims("a.%%%.c"), None);
}

#[test]
fn restore_drops_invalid_or_expired_admin_token() {
    let expired = token_for(&serde_json::json!({ "id": 1, "exp": 100 }));
    assert!(AuthState::restore(Some(expired), None, 200).admin.is_none());
    assert!(AuthState::restore(Some("junk".to_owned()), None, 200).admin.is_none());
    let valid = token_for(&serde_json::json!({ "id": 1, "exp": 300 }));
    let state = AuthState::restore(Some(valid), None, 200);
    assert!(state.loaded);
    assert!(state.admin.is_some());
}

#[test]
fn superadmin_has_every_permission() {
    let mut state = AuthState::default();
    assert!(state.login_admin(token_for(&serde_json::json!({ "id": 1, "role": "superadmin" })), 0));
    assert!(state.is_superadmin());
    assert!(Permission::ALL.iter().all(|p| state.has_permission(*p)));
}

#[test]
fn employee_permissions_follow_claim_map() {
    let mut state = AuthState::default();
    let token = token_for(&serde_json::json!({
        "id": 2,
        "role": "employee",
        "permissions": { "owners": true, "listings": false }
    }));
    assert!(state.login_admin(token, 0));
    assert!(state.has_permission(Permission::Owners));
    assert!(!state.has_permission(Permission::Listings));
    assert!(!state.has_permission(Permission::Settings));
    state.logout_admin();
    assert!(!state.has_permission(Permission::Owners));
}

#[test]
fn display_name_falls_back_to_email() {
    let mut state = AuthState::default();
    state.login_admin(token_for(&serde_json::json!({ "email": "boss@site.ru" })), 0);
    assert_eq!(state.admin_display_name(), "boss@site.ru");
}

#[test]
fn redirects_wait_for_storage() {
    let mut state = AuthState::default();
    assert!(!should_redirect_admin(&state));
    state.loaded = true;
    assert!(should_redirect_admin(&state));
    assert!(should_redirect_owner(&state));
    state.login_owner(OwnerSession { token: "t".to_owned(), owner_id: 3, full_name: "Олег".to_owned() });
    assert!(!should_redirect_owner(&state));
}

#[test]
fn restore_ignores_owner_session_without_token() {
    let owner = OwnerSession { token: String::new(), owner_id: 3, full_name: String::new() };
    assert!(AuthState::restore(None, Some(owner), 0).owner.is_none());
}
