//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior, and every login or
//! logout must keep `localStorage` in sync with the `AuthState` signal.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::OwnerSession;
use crate::state::auth::{ADMIN_TOKEN_KEY, AuthState, OWNER_SESSION_KEY, should_redirect_admin, should_redirect_owner};
use crate::util::{storage, subscription};

/// Read both sessions from storage into `auth`. Call once after hydration.
pub fn restore_sessions(auth: RwSignal<AuthState>) {
    let token = storage::load_string(ADMIN_TOKEN_KEY);
    let owner = storage::load_json::<OwnerSession>(OWNER_SESSION_KEY);
    let had_token = token.is_some();
    let state = AuthState::restore(token, owner, subscription::now().unix_timestamp());
    if had_token && state.admin.is_none() {
        storage::remove(ADMIN_TOKEN_KEY);
    }
    auth.set(state);
}

/// Store a new admin token. Returns false when the token is unusable.
pub fn login_admin(auth: RwSignal<AuthState>, token: String) -> bool {
    let now = subscription::now().unix_timestamp();
    let mut accepted = false;
    auth.update(|state| accepted = state.login_admin(token.clone(), now));
    if accepted {
        storage::save_string(ADMIN_TOKEN_KEY, &token);
    }
    accepted
}

pub fn logout_admin(auth: RwSignal<AuthState>) {
    storage::remove(ADMIN_TOKEN_KEY);
    auth.update(AuthState::logout_admin);
}

pub fn login_owner(auth: RwSignal<AuthState>, session: OwnerSession) {
    storage::save_json(OWNER_SESSION_KEY, &session);
    auth.update(|state| state.login_owner(session));
}

pub fn logout_owner(auth: RwSignal<AuthState>) {
    storage::remove(OWNER_SESSION_KEY);
    auth.update(AuthState::logout_owner);
}

/// Redirect to `/admin/login` once sessions are restored and no admin is present.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_admin(&auth.get()) {
            navigate("/admin/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/owner/login` once sessions are restored and no owner is present.
pub fn install_owner_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_owner(&auth.get()) {
            navigate("/owner/login", NavigateOptions::default());
        }
    });
}
