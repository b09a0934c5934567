use super::*;

#[test]
fn tel_href_strips_formatting() {
    assert_eq!(tel_href("+7 (900) 123-45-67"), "tel:+79001234567");
}

#[test]
fn telegram_href_accepts_handles_and_urls() {
    assert_eq!(telegram_href("@hotel120"), "https://t.me/hotel120");
    assert_eq!(telegram_href("hotel120"), "https://t.me/hotel120");
    assert_eq!(telegram_href(" https://t.me/x "), "https://t.me/x");
}
