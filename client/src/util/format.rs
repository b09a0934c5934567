//! Display formatting for prices, dates, and counts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;

use super::subscription::parse_timestamp;

/// Group digits with thin spaces: `25000` -> `25 000`.
#[must_use]
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Price in rubles: `2 500 ₽`.
#[must_use]
pub fn price(value: i64) -> String {
    format!("{} ₽", group_digits(value))
}

/// Signed balance movement: `+500 ₽` / `-1 200 ₽`.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn signed_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded > 0 { format!("+{}", price(rounded)) } else { price(rounded) }
}

/// Balance with kopecks dropped.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn balance(value: f64) -> String {
    price(value.round() as i64)
}

/// `01.03.2025`, or the raw text when unparseable.
#[must_use]
pub fn date(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(|at| at.format(format_description!("[day].[month].[year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// `01.03.2025 14:05`, or the raw text when unparseable.
#[must_use]
pub fn date_time(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(|at| at.format(format_description!("[day].[month].[year] [hour]:[minute]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Russian plural form selector: `plural(5, "номер", "номера", "номеров")`.
#[must_use]
pub fn plural<'a>(n: i64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let n = n.unsigned_abs();
    match (n % 10, n % 100) {
        (_, 11..=14) => many,
        (1, _) => one,
        (2..=4, _) => few,
        _ => many,
    }
}

/// `7 мин пешком`.
#[must_use]
pub fn walk_minutes(minutes: i64) -> String {
    format!("{minutes} мин пешком")
}
