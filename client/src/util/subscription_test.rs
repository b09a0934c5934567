use super::*;

use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2025-03-01 12:00:00 UTC);

#[test]
fn parse_accepts_rfc3339_and_naive_forms() {
    assert_eq!(parse_timestamp("2025-03-05T12:00:00Z"), Some(datetime!(2025-03-05 12:00:00 UTC)));
    assert_eq!(parse_timestamp("2025-03-05T15:00:00+03:00"), Some(datetime!(2025-03-05 12:00:00 UTC)));
    assert_eq!(parse_timestamp("2025-03-05T12:00:00"), Some(datetime!(2025-03-05 12:00:00 UTC)));
    assert_eq!(parse_timestamp("2025-03-05 12:00:00.250000"), Some(datetime!(2025-03-05 12:00:00.25 UTC)));
    assert_eq!(parse_timestamp("2025-03-05"), Some(datetime!(2025-03-05 00:00:00 UTC)));
    assert_eq!(parse_timestamp("soon"), None);
    assert_eq!(parse_timestamp(""), None);
}

#[test]
fn missing_expiry_is_inactive() {
    let status = subscription_status(None, NOW);
    assert_eq!(status.text, "Не активна");
    assert_eq!(status.tone, Tone::Danger);
    assert_eq!(status.days_left, None);
    assert_eq!(subscription_status(Some("garbage"), NOW).text, "Не активна");
}

#[test]
fn past_expiry_is_expired() {
    let status = subscription_status(Some("2025-03-01T11:59:59Z"), NOW);
    assert_eq!(status.text, "Истекла");
    assert_eq!(status.days_left, Some(0));
    assert_eq!(subscription_status(Some("2025-03-01T12:00:00Z"), NOW).text, "Истекла");
}

#[test]
fn partial_day_rounds_up() {
    let status = subscription_status(Some("2025-03-01T13:00:00Z"), NOW);
    assert_eq!(status.text, "1д");
    assert_eq!(status.tone, Tone::Danger);
}

#[test]
fn tone_thresholds() {
    assert_eq!(subscription_status(Some("2025-03-04T12:00:00Z"), NOW).tone, Tone::Danger);
    assert_eq!(subscription_status(Some("2025-03-04T12:00:01Z"), NOW).tone, Tone::Neutral);
    assert_eq!(subscription_status(Some("2025-03-08T12:00:00Z"), NOW).tone, Tone::Neutral);
    let long = subscription_status(Some("2025-03-31T12:00:00Z"), NOW);
    assert_eq!(long.tone, Tone::Muted);
    assert_eq!(long.text, "30д");
}

#[test]
fn countdown_formats_by_magnitude() {
    assert_eq!(countdown(datetime!(2025-03-03 15:30:10 UTC), NOW), "2д 3ч 30м");
    assert_eq!(countdown(datetime!(2025-03-01 14:05:09 UTC), NOW), "2ч 5м 9с");
    assert_eq!(countdown(datetime!(2025-03-01 12:04:02 UTC), NOW), "4м 2с");
    assert_eq!(countdown(NOW, NOW), "Истекла");
}

#[test]
fn extend_from_adds_days() {
    let extended = extend_from(NOW, 30);
    assert_eq!(extended, datetime!(2025-03-31 12:00:00 UTC));
    assert_eq!(parse_timestamp(&to_rfc3339(extended)), Some(extended));
}

#[test]
fn extend_from_clamps_day_count() {
    assert_eq!(extend_from(NOW, -5), NOW);
    assert_eq!(extend_from(NOW, i64::MAX), extend_from(NOW, MAX_EXTENSION_DAYS));
    assert_eq!(extend_from(NOW, MAX_EXTENSION_DAYS), datetime!(2035-02-27 12:00:00 UTC));
}

#[test]
fn inactive_detection() {
    assert!(is_inactive(Some("2025-03-01T12:00:00Z"), NOW));
    assert!(is_inactive(None, NOW));
    assert!(is_inactive(Some("2025-02-01T00:00:00Z"), NOW));
    assert!(!is_inactive(Some("2025-04-01T00:00:00Z"), NOW));
}
