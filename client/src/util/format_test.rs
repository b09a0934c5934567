use super::*;

#[test]
fn group_digits_inserts_spaces() {
    assert_eq!(group_digits(0), "0");
    assert_eq!(group_digits(999), "999");
    assert_eq!(group_digits(2500), "2 500");
    assert_eq!(group_digits(1_250_000), "1 250 000");
    assert_eq!(group_digits(-12_000), "-12 000");
}

#[test]
fn price_appends_ruble_sign() {
    assert_eq!(price(2500), "2 500 ₽");
}

#[test]
fn signed_amount_marks_credits() {
    assert_eq!(signed_amount(500.0), "+500 ₽");
    assert_eq!(signed_amount(-1200.4), "-1 200 ₽");
    assert_eq!(balance(1500.5), "1 501 ₽");
}

#[test]
fn dates_render_day_first() {
    assert_eq!(date("2025-03-01T09:05:00Z"), "01.03.2025");
    assert_eq!(date_time("2025-03-01 09:05:00"), "01.03.2025 09:05");
    assert_eq!(date("вчера"), "вчера");
}

#[test]
fn plural_forms() {
    assert_eq!(plural(1, "номер", "номера", "номеров"), "номер");
    assert_eq!(plural(3, "номер", "номера", "номеров"), "номера");
    assert_eq!(plural(11, "номер", "номера", "номеров"), "номеров");
    assert_eq!(plural(21, "номер", "номера", "номеров"), "номер");
    assert_eq!(plural(25, "номер", "номера", "номеров"), "номеров");
}
