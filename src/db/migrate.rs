//! Schema migrations for the bookings database.
//!
//! The `bookings` table mirrors the raw export columns one-to-one; values are
//! stored verbatim as TEXT so re-import comparison stays structural. Only the
//! booking number is typed, as the primary key.

use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `bookings` table exists with the current schema.
fn create_bookings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            booking_number     INTEGER PRIMARY KEY,
            booked_by          TEXT NOT NULL DEFAULT '',
            guest_name         TEXT NOT NULL DEFAULT '',
            arrival            TEXT NOT NULL DEFAULT '',
            departure          TEXT NOT NULL DEFAULT '',
            booked_on          TEXT NOT NULL DEFAULT '',
            status             TEXT NOT NULL DEFAULT '',
            rooms              TEXT NOT NULL DEFAULT '',
            persons            TEXT NOT NULL DEFAULT '',
            adults             TEXT NOT NULL DEFAULT '',
            children           TEXT NOT NULL DEFAULT '',
            children_ages      TEXT NOT NULL DEFAULT '',
            price              TEXT NOT NULL DEFAULT '',
            commission_percent TEXT NOT NULL DEFAULT '',
            commission_amount  TEXT NOT NULL DEFAULT '',
            payment_status     TEXT NOT NULL DEFAULT '',
            payment_method     TEXT NOT NULL DEFAULT '',
            remarks            TEXT NOT NULL DEFAULT '',
            booker_group       TEXT NOT NULL DEFAULT '',
            booker_country     TEXT NOT NULL DEFAULT '',
            travel_purpose     TEXT NOT NULL DEFAULT '',
            device             TEXT NOT NULL DEFAULT '',
            unit_type          TEXT NOT NULL DEFAULT '',
            nights             TEXT NOT NULL DEFAULT '',
            cancelled_on       TEXT NOT NULL DEFAULT '',
            address            TEXT NOT NULL DEFAULT '',
            phone              TEXT NOT NULL DEFAULT '',
            imported_at        TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_bookings_arrival ON bookings(arrival);
        CREATE INDEX IF NOT EXISTS idx_bookings_cancelled ON bookings(cancelled_on);
        "#,
    )?;
    Ok(())
}

fn bookings_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='bookings'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn bookings_has_column(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('bookings')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for c in cols {
        if c? == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Add `imported_at` to databases created before it existed.
fn migrate_add_imported_at(conn: &Connection) -> Result<()> {
    if !bookings_table_exists(conn)? || bookings_has_column(conn, "imported_at")? {
        return Ok(());
    }

    warning("Adding 'imported_at' column to bookings table...");
    conn.execute_batch(
        "ALTER TABLE bookings ADD COLUMN imported_at TEXT NOT NULL DEFAULT '';",
    )?;
    Ok(())
}

/// Run every pending migration. Safe to call on an up-to-date database.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    migrate_add_imported_at(conn)?;
    create_bookings_table(conn)?;
    Ok(())
}

/// Quick integrity check used by `db --check`.
pub fn check_integrity(conn: &Connection) -> Result<bool> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(result == "ok")
}
