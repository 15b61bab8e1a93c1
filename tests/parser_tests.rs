//! Row parser behavior: money/date parsing, defaults, cancellation derivation.

mod common;

use common::raw_row;
use roomledger::models::booking::{Booking, StatusKind};
use roomledger::models::raw_row::Column;
use roomledger::utils::date::{parse_booking_date, parse_booking_datetime};
use roomledger::utils::money::{parse_euro_amount, parse_percent};

#[test]
fn euro_amount_strips_suffix_and_normalizes_comma() {
    assert_eq!(parse_euro_amount("62.7 EUR").unwrap(), 62.7);
    assert_eq!(parse_euro_amount("62,7 EUR").unwrap(), 62.7);
    assert_eq!(parse_euro_amount("1.234,56 EUR").unwrap(), 1234.56);
    assert_eq!(parse_euro_amount("€ 45,00").unwrap(), 45.0);
    assert_eq!(parse_euro_amount("100").unwrap(), 100.0);
}

#[test]
fn euro_amount_rejects_garbage() {
    assert!(parse_euro_amount("").is_err());
    assert!(parse_euro_amount("n/a").is_err());
    assert!(parse_euro_amount("EUR").is_err());
}

#[test]
fn percent_accepts_comma_decimal() {
    assert_eq!(parse_percent("12").unwrap(), 12.0);
    assert_eq!(parse_percent("12,5").unwrap(), 12.5);
    assert!(parse_percent("").is_err());
}

#[test]
fn booking_dates_accept_both_export_shapes() {
    let d = parse_booking_date("2026-01-01").unwrap();
    assert_eq!(d.to_string(), "2026-01-01");

    let dt = parse_booking_datetime("2025-12-20 21:24:08").unwrap();
    assert_eq!(dt.to_string(), "2025-12-20 21:24:08");

    // date-time truncates to date
    assert_eq!(
        parse_booking_date("2025-12-20 21:24:08").unwrap().to_string(),
        "2025-12-20"
    );

    assert!(parse_booking_date("").is_none());
    assert!(parse_booking_date("soon").is_none());
}

#[test]
fn malformed_price_degrades_to_zero() {
    let raw = raw_row(1, "Anna Schmidt", "not a price", "2", "");
    let b = Booking::from_raw(&raw);
    assert_eq!(b.revenue, 0.0);
}

#[test]
fn missing_categoricals_default_to_unknown() {
    let mut raw = raw_row(1, "Anna Schmidt", "100 EUR", "2", "");
    raw.booker_country = String::new();
    raw.travel_purpose = "  ".into();
    raw.unit_type = String::new();

    let b = Booking::from_raw(&raw);
    assert_eq!(b.country, "unknown");
    assert_eq!(b.purpose, "unknown");
    assert_eq!(b.unit_type, "unknown");
}

#[test]
fn guest_name_is_trimmed() {
    let raw = raw_row(1, "  Anna Schmidt ", "100 EUR", "2", "");
    let b = Booking::from_raw(&raw);
    assert_eq!(b.guest_name, "Anna Schmidt");
}

#[test]
fn cancellation_derives_from_date_not_status() {
    // status says cancelled, but no cancellation date: not cancelled
    let mut raw = raw_row(1, "Anna Schmidt", "100 EUR", "2", "");
    raw.status = "Storniert".into();
    assert!(!Booking::from_raw(&raw).is_cancelled);

    // cancellation date present, friendly status: cancelled anyway
    let mut raw = raw_row(2, "Jan de Vries", "50 EUR", "1", "2025-12-28 10:00:00");
    raw.status = "OK".into();
    let b = Booking::from_raw(&raw);
    assert!(b.is_cancelled);
    assert!(b.cancelled_on.is_some());
}

#[test]
fn status_kind_classifies_known_codes() {
    let mut raw = raw_row(1, "Anna Schmidt", "100 EUR", "2", "");
    raw.status = "OK".into();
    assert_eq!(Booking::from_raw(&raw).status_kind(), StatusKind::Ok);
    raw.status = "Storniert".into();
    assert_eq!(Booking::from_raw(&raw).status_kind(), StatusKind::Cancelled);
    raw.status = "Wartend".into();
    assert_eq!(Booking::from_raw(&raw).status_kind(), StatusKind::Pending);
    raw.status = "???".into();
    assert_eq!(Booking::from_raw(&raw).status_kind(), StatusKind::Other);
}

#[test]
fn header_canonicalization_absorbs_quirks() {
    assert_eq!(Column::from_header("Buchungsnummer"), Some(Column::BookingNumber));
    // trailing space from the real export
    assert_eq!(Column::from_header("Gästename(n) "), Some(Column::GuestName));
    // UTF-8 read as Latin-1
    assert_eq!(
        Column::from_header("Aufenthaltsdauer (NÃ¤chte)"),
        Some(Column::Nights)
    );
    assert_eq!(Column::from_header("GerÃ¤t"), Some(Column::Device));
    assert_eq!(Column::from_header("Spalte XY"), None);
}
