//! Date handling for Booking.com exports.
//!
//! Exports carry two shapes: date-only ("2026-01-01") for arrival/departure
//! and date-time ("2025-12-20 21:24:08") for booked-on and cancellation
//! timestamps.

use chrono::{Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a booking date-time field, accepting both export shapes.
pub fn parse_booking_datetime(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a booking date field; a date-time value is truncated to its date.
pub fn parse_booking_date(raw: &str) -> Option<NaiveDate> {
    parse_booking_datetime(raw).map(|dt| dt.date())
}
