//! Turkish display formatting for dates, percentages, sizes, and prices.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::{Date, PrimitiveDateTime};

/// `dd.mm.yyyy`
#[must_use]
pub fn date_tr(date: Date) -> String {
    format!("{:02}.{:02}.{}", date.day(), u8::from(date.month()), date.year())
}

/// `dd.mm.yyyy HH:MM`
#[must_use]
pub fn datetime_tr(at: PrimitiveDateTime) -> String {
    format!("{} {:02}:{:02}", date_tr(at.date()), at.hour(), at.minute())
}

/// Savings percentage with the sign placed before the number (`%12`,
/// `%8.5`); missing values render as `-`.
#[must_use]
pub fn percent_tr(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("%{v:.0}"),
        Some(v) => format!("%{v:.1}"),
        None => "-".to_owned(),
    }
}

#[must_use]
pub fn size_mb(value: f64) -> String {
    format!("{value:.1} MB")
}

/// Unit price in Turkish lira.
#[must_use]
pub fn price_try(value: f64) -> String {
    format!("₺{value:.2}")
}

/// `yyyy-mm-dd`, the value format of `<input type="date">`.
#[must_use]
pub fn date_iso(date: Date) -> String {
    format!("{}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Parse a `yyyy-mm-dd` date input value.
#[must_use]
pub fn parse_date_iso(raw: &str) -> Option<Date> {
    let mut parts = raw.trim().splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = time::Month::try_from(parts.next()?.parse::<u8>().ok()?).ok()?;
    let day = parts.next()?.parse().ok()?;
    Date::from_calendar_date(year, month, day).ok()
}
