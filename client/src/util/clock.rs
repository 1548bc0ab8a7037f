//! Wall-clock access.
//!
//! The browser clock is read through `js-sys` in hydrate builds; the server
//! and native tests use `time::OffsetDateTime`.

use time::macros::datetime;
use time::{Date, PrimitiveDateTime};

/// Used when the browser reports a date `time` cannot represent.
const FALLBACK: PrimitiveDateTime = datetime!(1970-01-01 0:00);

/// Current local date and time.
#[must_use]
pub fn now() -> PrimitiveDateTime {
    #[cfg(feature = "hydrate")]
    {
        browser_now().unwrap_or(FALLBACK)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let now = time::OffsetDateTime::now_utc();
        let now = PrimitiveDateTime::new(now.date(), now.time());
        if now < FALLBACK { FALLBACK } else { now }
    }
}

#[must_use]
pub fn today() -> Date {
    now().date()
}

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        #[allow(clippy::cast_precision_loss)]
        let ms = (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as f64;
        ms
    }
}

/// Seed for the simulated engines, mixed with `salt` so engines created in
/// the same millisecond differ.
#[must_use]
pub fn seed(salt: u64) -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ms = now_ms().max(0.0) as u64;
    ms ^ salt.rotate_left(32)
}

#[cfg(feature = "hydrate")]
fn browser_now() -> Option<PrimitiveDateTime> {
    let js = js_sys::Date::new_0();
    let year = i32::try_from(js.get_full_year()).ok()?;
    let month = time::Month::try_from(u8::try_from(js.get_month() + 1).ok()?).ok()?;
    let day = u8::try_from(js.get_date()).ok()?;
    let date = Date::from_calendar_date(year, month, day).ok()?;
    let time = time::Time::from_hms(
        u8::try_from(js.get_hours()).ok()?,
        u8::try_from(js.get_minutes()).ok()?,
        u8::try_from(js.get_seconds()).ok()?,
    )
    .ok()?;
    Some(PrimitiveDateTime::new(date, time))
}
