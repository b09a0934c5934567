//! Auth-session state for admins and owners.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the back-office pages. The admin session is a
//! JWT stored under `adminToken`; its claims are decoded locally to drive
//! tab visibility, while the remote functions remain the authority. The
//! owner session is stored as JSON under `ownerSession`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::types::{AdminClaims, OwnerSession, Permission, Role};

pub const ADMIN_TOKEN_KEY: &str = "adminToken";
pub const OWNER_SESSION_KEY: &str = "ownerSession";

/// Decode the payload segment of a JWT without verifying it.
#[must_use]
pub fn decode_claims(token: &str) -> Option<AdminClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminSession {
    pub token: String,
    pub claims: AdminClaims,
}

/// Current sessions plus whether storage has been read yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub admin: Option<AdminSession>,
    pub owner: Option<OwnerSession>,
    pub loaded: bool,
}

impl AuthState {
    /// Build state from stored values. A malformed or expired admin token
    /// yields no admin session.
    #[must_use]
    pub fn restore(admin_token: Option<String>, owner: Option<OwnerSession>, now_unix: i64) -> Self {
        let admin = admin_token.and_then(|token| admin_session(token, now_unix));
        let owner = owner.filter(|s| !s.token.is_empty());
        Self { admin, owner, loaded: true }
    }

    /// Accept a freshly issued admin token. Returns false when it cannot be decoded.
    pub fn login_admin(&mut self, token: String, now_unix: i64) -> bool {
        self.admin = admin_session(token, now_unix);
        self.admin.is_some()
    }

    pub fn logout_admin(&mut self) {
        self.admin = None;
    }

    pub fn login_owner(&mut self, session: OwnerSession) {
        self.owner = Some(session);
    }

    pub fn logout_owner(&mut self) {
        self.owner = None;
    }

    #[must_use]
    pub fn admin_token(&self) -> Option<String> {
        self.admin.as_ref().map(|s| s.token.clone())
    }

    #[must_use]
    pub fn is_superadmin(&self) -> bool {
        self.admin.as_ref().is_some_and(|s| s.claims.role == Role::Superadmin)
    }

    /// Superadmins hold every permission; employees only what the claim grants.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        let Some(session) = &self.admin else {
            return false;
        };
        session.claims.role == Role::Superadmin || session.claims.permissions.get(permission.key()) == Some(&true)
    }

    /// Name shown in the admin header.
    #[must_use]
    pub fn admin_display_name(&self) -> String {
        let Some(session) = &self.admin else {
            return String::new();
        };
        session
            .claims
            .full_name
            .clone()
            .or_else(|| session.claims.email.clone())
            .unwrap_or_else(|| "Администратор".to_owned())
    }
}

fn admin_session(token: String, now_unix: i64) -> Option<AdminSession> {
    let claims = decode_claims(&token)?;
    if claims.exp.is_some_and(|exp| exp <= now_unix) {
        log::info!("stored admin token expired");
        return None;
    }
    Some(AdminSession { token, claims })
}

/// Admin routes redirect once storage is read and no session exists.
#[must_use]
pub fn should_redirect_admin(state: &AuthState) -> bool {
    state.loaded && state.admin.is_none()
}

#[must_use]
pub fn should_redirect_owner(state: &AuthState) -> bool {
    state.loaded && state.owner.is_none()
}
