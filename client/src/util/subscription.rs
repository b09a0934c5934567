//! Subscription expiry formatting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin cards, the owner dashboard, and the live countdown all render
//! the remaining paid time of a listing. Every function takes `now`
//! explicitly so the thresholds are testable without a clock.
//!
//! The remote emits timestamps either as RFC 3339 or as naive ISO
//! (`2025-03-01T12:00:00` or `2025-03-01 12:00:00.123456`); naive values
//! are UTC.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time};

const DAY_MS: i128 = 86_400_000;

/// Badge color for a subscription state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Expired, inactive, or three days or fewer left.
    Danger,
    /// Up to a week left.
    Neutral,
    /// Comfortably active.
    Muted,
}

impl Tone {
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Danger => "badge badge-danger",
            Self::Neutral => "badge badge-neutral",
            Self::Muted => "badge badge-muted",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriptionStatus {
    pub text: String,
    pub tone: Tone,
    pub days_left: Option<i64>,
}

/// Parse a remote timestamp.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    let normalized = raw.replacen(' ', "T", 1);
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    if let Ok(parsed) = PrimitiveDateTime::parse(&normalized, naive) {
        return Some(parsed.assume_utc());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc())
}

/// Format as RFC 3339, the form written back into local listing state.
#[must_use]
pub fn to_rfc3339(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_default()
}

/// Longest single extension accepted from manual input.
pub const MAX_EXTENSION_DAYS: i64 = 3650;

/// The moment `days` days after `now`, with `days` clamped to `0..=MAX_EXTENSION_DAYS`.
#[must_use]
pub fn extend_from(now: OffsetDateTime, days: i64) -> OffsetDateTime {
    now.checked_add(Duration::days(days.clamp(0, MAX_EXTENSION_DAYS))).unwrap_or(now)
}

/// Whole days left, rounded up. Zero or negative once expired.
#[must_use]
pub fn days_left(expires: OffsetDateTime, now: OffsetDateTime) -> i64 {
    let ms = (expires - now).whole_milliseconds();
    if ms <= 0 {
        return 0;
    }
    i64::try_from((ms + DAY_MS - 1) / DAY_MS).unwrap_or(i64::MAX)
}

/// Whether the subscription is missing or already expired.
#[must_use]
pub fn is_inactive(expires_at: Option<&str>, now: OffsetDateTime) -> bool {
    expires_at.and_then(parse_timestamp).is_none_or(|expires| expires <= now)
}

/// Badge text and tone for an expiry timestamp.
#[must_use]
pub fn subscription_status(expires_at: Option<&str>, now: OffsetDateTime) -> SubscriptionStatus {
    let Some(expires) = expires_at.and_then(parse_timestamp) else {
        return SubscriptionStatus { text: "Не активна".to_owned(), tone: Tone::Danger, days_left: None };
    };
    let days = days_left(expires, now);
    if days <= 0 {
        return SubscriptionStatus { text: "Истекла".to_owned(), tone: Tone::Danger, days_left: Some(0) };
    }
    let tone = match days {
        ..=3 => Tone::Danger,
        4..=7 => Tone::Neutral,
        _ => Tone::Muted,
    };
    SubscriptionStatus { text: format!("{days}д"), tone, days_left: Some(days) }
}

/// Ticking countdown text for a live timer.
#[must_use]
pub fn countdown(expires: OffsetDateTime, now: OffsetDateTime) -> String {
    let total = (expires - now).whole_seconds();
    if total <= 0 {
        return "Истекла".to_owned();
    }
    let days = total / 86_400;
    let hours = total % 86_400 / 3_600;
    let minutes = total % 3_600 / 60;
    let seconds = total % 60;
    if days > 0 {
        format!("{days}д {hours}ч {minutes}м")
    } else if hours > 0 {
        format!("{hours}ч {minutes}м {seconds}с")
    } else {
        format!("{minutes}м {seconds}с")
    }
}

/// Current UTC time. In the browser this reads `Date.now()`.
#[must_use]
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
