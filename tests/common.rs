#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use roomledger::models::booking::Booking;
use roomledger::models::raw_row::RawRow;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rl() -> Command {
    cargo_bin_cmd!("roomledger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roomledger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// CSV header line as Booking.com emits it, quirks included: the guest name
/// column carries a trailing space and the nights column the usual mojibake.
pub const FIXTURE_HEADER: &str = "Buchungsnummer,Gebucht von,Gästename(n) ,Anreise,Abreise,Gebucht am,Status,Zimmer,Personen,Erwachsene,Kinder,Alter der Kinder,Preis,Kommission %,Kommissionsbetrag,Zahlungsstatus,Zahlungsmethode (Zahlungsanbieter),Bemerkungen,Buchergruppe,Booker country,Reisegrund,GerÃ¤t,Art der Wohneinheit,Aufenthaltsdauer (NÃ¤chte),Stornierungsdatum,Adresse,Telefonnummer";

/// One plausible data line for the fixture header.
pub fn fixture_line(
    number: i64,
    guest: &str,
    arrival: &str,
    departure: &str,
    status: &str,
    price: &str,
    nights: u32,
    cancelled_on: &str,
) -> String {
    format!(
        "{number},Booking.com,{guest},{arrival},{departure},2025-12-20 21:24:08,{status},1,2,2,0,,{price},12,7.52 EUR,Bezahlt,Kreditkarte (Booking.com),,,de,Urlaub,Desktop,Doppelzimmer,{nights},{cancelled_on},Musterstr. 1,+49 211 000000"
    )
}

/// Write a CSV fixture and return its path.
pub fn write_fixture_csv(name: &str, lines: &[String]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fixture.csv", name));
    let p = path.to_string_lossy().to_string();
    let mut content = String::from(FIXTURE_HEADER);
    for line in lines {
        content.push('\n');
        content.push_str(line);
    }
    fs::write(&p, content).expect("write fixture");
    p
}

/// Initialize a DB and import a small standard dataset via the CLI.
pub fn init_db_with_data(db_path: &str) {
    rl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let fixture = write_fixture_csv(
        "seed",
        &[
            fixture_line(1001, "Anna Schmidt", "2026-01-01", "2026-01-03", "OK", "100 EUR", 2, ""),
            fixture_line(1002, "Jan de Vries", "2026-01-02", "2026-01-03", "Storniert", "50 EUR", 1, "2025-12-28 10:00:00"),
        ],
    );

    rl().args(["--db", db_path, "import", &fixture])
        .assert()
        .success();
}

/// Build a raw row directly, bypassing file ingestion.
pub fn raw_row(number: i64, guest: &str, price: &str, nights: &str, cancelled_on: &str) -> RawRow {
    RawRow {
        booking_number: number,
        booked_by: "Booking.com".into(),
        guest_name: guest.into(),
        arrival: "2026-01-01".into(),
        departure: "2026-01-03".into(),
        booked_on: "2025-12-20 21:24:08".into(),
        status: "OK".into(),
        rooms: "1".into(),
        persons: "2".into(),
        adults: "2".into(),
        children: "0".into(),
        price: price.into(),
        commission_percent: "12".into(),
        commission_amount: "7.52 EUR".into(),
        payment_status: "Bezahlt".into(),
        booker_country: "de".into(),
        travel_purpose: "Urlaub".into(),
        unit_type: "Doppelzimmer".into(),
        nights: nights.into(),
        cancelled_on: cancelled_on.into(),
        ..RawRow::default()
    }
}

/// Build a normalized booking directly for the pure calculators.
pub fn booking(
    number: i64,
    check_in: NaiveDate,
    nights: u32,
    revenue: f64,
    cancelled: bool,
) -> Booking {
    Booking {
        booking_number: number,
        guest_name: format!("Guest {number}"),
        check_in,
        check_out: check_in + chrono::Days::new(u64::from(nights)),
        booked_on: check_in.and_hms_opt(12, 0, 0).unwrap(),
        status: if cancelled { "Storniert" } else { "OK" }.to_string(),
        rooms: 1,
        guests: 2,
        adults: 2,
        children: 0,
        revenue,
        commission: revenue * 0.12,
        commission_rate: 12.0,
        payment_status: "Bezahlt".to_string(),
        country: "de".to_string(),
        purpose: "Urlaub".to_string(),
        unit_type: "Doppelzimmer".to_string(),
        nights,
        is_cancelled: cancelled,
        cancelled_on: if cancelled {
            check_in.and_hms_opt(0, 0, 0)
        } else {
            None
        },
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
