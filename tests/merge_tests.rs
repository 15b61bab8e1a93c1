//! Store reconciliation: duplicate detection, field diffs and merge counts.

mod common;

use common::raw_row;
use roomledger::db::initialize::init_db;
use roomledger::db::store::{analyze, get_all, merge};
use roomledger::errors::AppError;
use rusqlite::Connection;

fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init schema");
    conn
}

#[test]
fn init_surfaces_migration_error_on_non_database_file() {
    let path = std::env::temp_dir().join("not_a_db_roomledger.sqlite");
    std::fs::write(&path, "this is not an sqlite file").unwrap();

    let conn = Connection::open(&path).expect("open is lazy, must succeed");
    let err = init_db(&conn).expect_err("schema pass must fail");
    assert!(matches!(err, AppError::Migration(_)));
}

#[test]
fn fresh_import_is_all_new() {
    let conn = test_conn();
    let incoming = vec![
        raw_row(1001, "Anna Schmidt", "100 EUR", "2", ""),
        raw_row(1002, "Jan de Vries", "50 EUR", "1", ""),
    ];

    let analysis = analyze(&conn, &incoming).unwrap();
    assert_eq!(analysis.new_bookings.len(), 2);
    assert!(analysis.duplicates_no_change.is_empty());
    assert!(analysis.duplicates_with_updates.is_empty());
}

#[test]
fn reimport_of_same_set_is_idempotent() {
    let mut conn = test_conn();
    let incoming = vec![
        raw_row(1001, "Anna Schmidt", "100 EUR", "2", ""),
        raw_row(1002, "Jan de Vries", "50 EUR", "1", ""),
    ];

    let result = merge(&mut conn, &incoming, false).unwrap();
    assert_eq!(result.added, 2);
    assert_eq!(result.updated, 0);
    assert_eq!(result.skipped, 0);

    let analysis = analyze(&conn, &incoming).unwrap();
    assert!(analysis.new_bookings.is_empty());
    assert_eq!(analysis.duplicates_no_change.len(), incoming.len());
    assert!(analysis.duplicates_with_updates.is_empty());
}

#[test]
fn single_field_change_yields_single_diff_entry() {
    let mut conn = test_conn();
    let mut row = raw_row(1001, "Anna Schmidt", "100 EUR", "2", "");
    row.status = "Wartend".into();
    merge(&mut conn, std::slice::from_ref(&row), false).unwrap();

    row.status = "OK".into();
    let analysis = analyze(&conn, &[row]).unwrap();

    assert_eq!(analysis.duplicates_with_updates.len(), 1);
    let diff = &analysis.duplicates_with_updates[0];
    assert_eq!(diff.booking_number, 1001);
    assert_eq!(diff.changes.len(), 1);
    assert_eq!(diff.changes[0].field, "status");
    assert_eq!(diff.changes[0].old, "Wartend");
    assert_eq!(diff.changes[0].new, "OK");
}

#[test]
fn whitespace_difference_counts_as_change() {
    let mut conn = test_conn();
    let row = raw_row(1001, "Anna Schmidt", "100 EUR", "2", "");
    merge(&mut conn, std::slice::from_ref(&row), false).unwrap();

    let mut changed = row.clone();
    changed.guest_name = "Anna Schmidt ".into();
    let analysis = analyze(&conn, &[changed]).unwrap();
    assert_eq!(analysis.duplicates_with_updates.len(), 1);
    assert_eq!(analysis.duplicates_with_updates[0].changes[0].field, "guest_name");
}

#[test]
fn merge_counts_mixed_batch_without_updates() {
    let mut conn = test_conn();
    let unchanged = raw_row(1001, "Anna Schmidt", "100 EUR", "2", "");
    let mut to_change = raw_row(1002, "Jan de Vries", "50 EUR", "1", "");
    merge(
        &mut conn,
        &[unchanged.clone(), to_change.clone()],
        false,
    )
    .unwrap();

    to_change.price = "55 EUR".into();
    let batch = vec![
        raw_row(1003, "Marie Dubois", "80 EUR", "2", ""),
        raw_row(1004, "Tom Baker", "60 EUR", "1", ""),
        unchanged,
        to_change,
    ];

    let result = merge(&mut conn, &batch, false).unwrap();
    assert_eq!(result.added, 2);
    assert_eq!(result.updated, 0);
    assert_eq!(result.skipped, 2);
}

#[test]
fn merge_applies_updates_when_confirmed() {
    let mut conn = test_conn();
    let mut row = raw_row(1001, "Anna Schmidt", "100 EUR", "2", "");
    merge(&mut conn, std::slice::from_ref(&row), false).unwrap();

    row.price = "120 EUR".into();
    let result = merge(&mut conn, std::slice::from_ref(&row), true).unwrap();
    assert_eq!(result.added, 0);
    assert_eq!(result.updated, 1);
    assert_eq!(result.skipped, 0);

    let stored = get_all(&conn).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].price, "120 EUR");
}

#[test]
fn merge_without_confirmation_keeps_stored_values() {
    let mut conn = test_conn();
    let row = raw_row(1001, "Anna Schmidt", "100 EUR", "2", "");
    merge(&mut conn, std::slice::from_ref(&row), false).unwrap();

    let mut changed = row.clone();
    changed.price = "999 EUR".into();
    let result = merge(&mut conn, &[changed], false).unwrap();
    assert_eq!(result.skipped, 1);

    let stored = get_all(&conn).unwrap();
    assert_eq!(stored[0].price, "100 EUR");
}

#[test]
fn uncancelling_is_an_ordinary_field_diff() {
    let mut conn = test_conn();
    let row = raw_row(1001, "Anna Schmidt", "100 EUR", "2", "2025-12-28 10:00:00");
    merge(&mut conn, std::slice::from_ref(&row), false).unwrap();

    let mut uncancelled = row.clone();
    uncancelled.cancelled_on = String::new();
    let analysis = analyze(&conn, &[uncancelled]).unwrap();

    assert_eq!(analysis.duplicates_with_updates.len(), 1);
    let changes = &analysis.duplicates_with_updates[0].changes;
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].field, "cancelled_on");
    assert_eq!(changes[0].new, "");
}

#[test]
fn get_all_returns_rows_verbatim() {
    let mut conn = test_conn();
    let row = raw_row(1001, "Anna Schmidt", "1.234,56 EUR", "2", "");
    merge(&mut conn, std::slice::from_ref(&row), false).unwrap();

    let stored = get_all(&conn).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], row);
}
