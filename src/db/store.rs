//! Booking store and import reconciler.
//!
//! The store owns the persisted raw rows, keyed by booking number. A
//! re-imported number never creates a second entity: it is either an exact
//! duplicate or a pending update that needs explicit confirmation.

use crate::errors::AppResult;
use crate::models::raw_row::{FieldChange, RawRow};
use rusqlite::{Connection, Result, Row, params};
use serde::Serialize;
use std::collections::HashMap;

/// Pending update for a stored booking: the incoming row plus the per-field
/// diff against what is stored. Consumed by the confirmation step, then
/// discarded.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateDiff {
    pub booking_number: i64,
    pub incoming: RawRow,
    pub changes: Vec<FieldChange>,
}

/// Classification of an incoming batch against the current store.
#[derive(Debug, Default)]
pub struct ImportAnalysis {
    pub new_bookings: Vec<RawRow>,
    pub duplicates_no_change: Vec<RawRow>,
    pub duplicates_with_updates: Vec<UpdateDiff>,
}

/// Outcome of a merge pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeResult {
    pub added: usize,
    pub updated: usize,
    pub skipped: usize,
}

const SELECT_COLUMNS: &str = "booking_number, booked_by, guest_name, arrival, departure, \
     booked_on, status, rooms, persons, adults, children, children_ages, price, \
     commission_percent, commission_amount, payment_status, payment_method, remarks, \
     booker_group, booker_country, travel_purpose, device, unit_type, nights, \
     cancelled_on, address, phone";

fn map_row(row: &Row) -> Result<RawRow> {
    Ok(RawRow {
        booking_number: row.get("booking_number")?,
        booked_by: row.get("booked_by")?,
        guest_name: row.get("guest_name")?,
        arrival: row.get("arrival")?,
        departure: row.get("departure")?,
        booked_on: row.get("booked_on")?,
        status: row.get("status")?,
        rooms: row.get("rooms")?,
        persons: row.get("persons")?,
        adults: row.get("adults")?,
        children: row.get("children")?,
        children_ages: row.get("children_ages")?,
        price: row.get("price")?,
        commission_percent: row.get("commission_percent")?,
        commission_amount: row.get("commission_amount")?,
        payment_status: row.get("payment_status")?,
        payment_method: row.get("payment_method")?,
        remarks: row.get("remarks")?,
        booker_group: row.get("booker_group")?,
        booker_country: row.get("booker_country")?,
        travel_purpose: row.get("travel_purpose")?,
        device: row.get("device")?,
        unit_type: row.get("unit_type")?,
        nights: row.get("nights")?,
        cancelled_on: row.get("cancelled_on")?,
        address: row.get("address")?,
        phone: row.get("phone")?,
    })
}

/// Load the full stored set.
pub fn get_all(conn: &Connection) -> AppResult<Vec<RawRow>> {
    let sql = format!("SELECT {SELECT_COLUMNS} FROM bookings ORDER BY booking_number ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Classify an incoming batch against the stored set.
///
/// Comparison is structural over the raw strings; formatting differences
/// count as changes, nothing is normalized here.
pub fn analyze(conn: &Connection, incoming: &[RawRow]) -> AppResult<ImportAnalysis> {
    let stored: HashMap<i64, RawRow> = get_all(conn)?
        .into_iter()
        .map(|r| (r.booking_number, r))
        .collect();

    let mut analysis = ImportAnalysis::default();
    for row in incoming {
        match stored.get(&row.booking_number) {
            None => analysis.new_bookings.push(row.clone()),
            Some(existing) => {
                let changes = existing.diff(row);
                if changes.is_empty() {
                    analysis.duplicates_no_change.push(row.clone());
                } else {
                    analysis.duplicates_with_updates.push(UpdateDiff {
                        booking_number: row.booking_number,
                        incoming: row.clone(),
                        changes,
                    });
                }
            }
        }
    }
    Ok(analysis)
}

/// Merge an incoming batch into the store.
///
/// New bookings are always inserted. Changed duplicates overwrite the stored
/// record only when `apply_updates` is set; unchanged duplicates are always
/// skipped. The whole batch runs in one transaction, so a storage failure
/// leaves no partial write behind. Taking `&mut Connection` serializes
/// concurrent merges within the process.
pub fn merge(conn: &mut Connection, incoming: &[RawRow], apply_updates: bool) -> AppResult<MergeResult> {
    let analysis = analyze(conn, incoming)?;

    let tx = conn.transaction()?;
    let imported_at = chrono::Local::now().to_rfc3339();

    for row in &analysis.new_bookings {
        upsert(&tx, row, &imported_at)?;
    }

    let mut updated = 0;
    if apply_updates {
        for diff in &analysis.duplicates_with_updates {
            upsert(&tx, &diff.incoming, &imported_at)?;
            updated += 1;
        }
    }

    tx.commit()?;

    let skipped = analysis.duplicates_no_change.len()
        + if apply_updates {
            0
        } else {
            analysis.duplicates_with_updates.len()
        };

    Ok(MergeResult {
        added: analysis.new_bookings.len(),
        updated,
        skipped,
    })
}

fn upsert(conn: &Connection, row: &RawRow, imported_at: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO bookings (booking_number, booked_by, guest_name, arrival, departure, \
             booked_on, status, rooms, persons, adults, children, children_ages, price, \
             commission_percent, commission_amount, payment_status, payment_method, remarks, \
             booker_group, booker_country, travel_purpose, device, unit_type, nights, \
             cancelled_on, address, phone, imported_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, \
             ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28)
         ON CONFLICT(booking_number) DO UPDATE SET
             booked_by = excluded.booked_by,
             guest_name = excluded.guest_name,
             arrival = excluded.arrival,
             departure = excluded.departure,
             booked_on = excluded.booked_on,
             status = excluded.status,
             rooms = excluded.rooms,
             persons = excluded.persons,
             adults = excluded.adults,
             children = excluded.children,
             children_ages = excluded.children_ages,
             price = excluded.price,
             commission_percent = excluded.commission_percent,
             commission_amount = excluded.commission_amount,
             payment_status = excluded.payment_status,
             payment_method = excluded.payment_method,
             remarks = excluded.remarks,
             booker_group = excluded.booker_group,
             booker_country = excluded.booker_country,
             travel_purpose = excluded.travel_purpose,
             device = excluded.device,
             unit_type = excluded.unit_type,
             nights = excluded.nights,
             cancelled_on = excluded.cancelled_on,
             address = excluded.address,
             phone = excluded.phone,
             imported_at = excluded.imported_at",
        params![
            row.booking_number,
            row.booked_by,
            row.guest_name,
            row.arrival,
            row.departure,
            row.booked_on,
            row.status,
            row.rooms,
            row.persons,
            row.adults,
            row.children,
            row.children_ages,
            row.price,
            row.commission_percent,
            row.commission_amount,
            row.payment_status,
            row.payment_method,
            row.remarks,
            row.booker_group,
            row.booker_country,
            row.travel_purpose,
            row.device,
            row.unit_type,
            row.nights,
            row.cancelled_on,
            row.address,
            row.phone,
            imported_at,
        ],
    )?;
    Ok(())
}
