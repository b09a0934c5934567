//! Browser localStorage helpers for sessions and drafts.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so state
//! modules can persist tokens and wizard drafts without repeating web-sys
//! glue. Under SSR every read is empty and every write is a no-op.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a raw string for `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a raw string for `key`.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Load a JSON value for `key`; malformed entries read as absent.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_string(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding stored {key}: {e}");
            None
        }
    }
}

/// Save a JSON value for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        save_string(key, &raw);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
