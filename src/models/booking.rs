//! Normalized booking record derived from a raw export row.

use crate::models::raw_row::RawRow;
use crate::utils::date::{now, parse_booking_date, parse_booking_datetime, today};
use crate::utils::money::{parse_euro_amount, parse_percent};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub booking_number: i64,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub booked_on: NaiveDateTime,
    /// Verbatim status code ("OK", "Storniert", "Wartend", ...).
    pub status: String,
    pub rooms: u32,
    pub guests: u32,
    pub adults: u32,
    pub children: u32,
    pub revenue: f64,
    pub commission: f64,
    pub commission_rate: f64,
    pub payment_status: String,
    pub country: String,
    pub purpose: String,
    pub unit_type: String,
    pub nights: u32,
    pub is_cancelled: bool,
    pub cancelled_on: Option<NaiveDateTime>,
}

/// Coarse status classification for display styling.
/// Advisory only: cancellation is derived from the cancellation date, never
/// from this free-text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Ok,
    Cancelled,
    Pending,
    Other,
}

impl Booking {
    /// Convert a raw export row into a normalized booking.
    ///
    /// Never fails: categorical fields default to "unknown", mandatory dates
    /// default to now, and a malformed money value degrades to 0 (lossy by
    /// policy, decided here and nowhere else).
    pub fn from_raw(row: &RawRow) -> Self {
        let cancelled_on = parse_booking_datetime(&row.cancelled_on);

        Self {
            booking_number: row.booking_number,
            guest_name: row.guest_name.trim().to_string(),
            check_in: parse_booking_date(&row.arrival).unwrap_or_else(today),
            check_out: parse_booking_date(&row.departure).unwrap_or_else(today),
            booked_on: parse_booking_datetime(&row.booked_on).unwrap_or_else(now),
            status: row.status.clone(),
            rooms: parse_count(&row.rooms),
            guests: parse_count(&row.persons),
            adults: parse_count(&row.adults),
            children: parse_count(&row.children),
            revenue: parse_euro_amount(&row.price).unwrap_or(0.0),
            commission: parse_euro_amount(&row.commission_amount).unwrap_or(0.0),
            commission_rate: parse_percent(&row.commission_percent).unwrap_or(0.0),
            payment_status: row.payment_status.clone(),
            country: default_unknown(&row.booker_country),
            purpose: default_unknown(&row.travel_purpose),
            unit_type: default_unknown(&row.unit_type),
            nights: parse_count(&row.nights),
            is_cancelled: !row.cancelled_on.trim().is_empty(),
            cancelled_on,
        }
    }

    pub fn status_kind(&self) -> StatusKind {
        let s = self.status.to_lowercase();
        if s.contains("storniert") || s.contains("cancelled") {
            StatusKind::Cancelled
        } else if s.contains("wartend") || s.contains("pending") {
            StatusKind::Pending
        } else if s.contains("ok") {
            StatusKind::Ok
        } else {
            StatusKind::Other
        }
    }
}

fn parse_count(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

fn default_unknown(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        "unknown".to_string()
    } else {
        s.to_string()
    }
}
