//! Small browser helpers (scrolling, confirm prompts, external links).
//!
//! TRADE-OFFS
//! ==========
//! All helpers are best-effort browser-only behavior; SSR paths no-op so
//! server rendering stays deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Smooth-scroll the window back to the top (wizard step changes).
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Native confirmation dialog. Always `false` outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Full-page navigation, used for `tel:` and external links.
pub fn open_href(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// `tel:` link with formatting characters stripped.
#[must_use]
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    format!("tel:{digits}")
}

/// Telegram link from `@name`, `name`, or a full URL.
#[must_use]
pub fn telegram_href(handle: &str) -> String {
    let handle = handle.trim();
    if handle.starts_with("http://") || handle.starts_with("https://") {
        return handle.to_owned();
    }
    format!("https://t.me/{}", handle.trim_start_matches('@'))
}
