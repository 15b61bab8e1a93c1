//! CSV decoding for Booking.com exports.

use crate::errors::{AppError, AppResult};
use crate::models::raw_row::{Column, RawRow};
use std::path::Path;

/// Read a CSV export into raw rows.
///
/// Headers are canonicalized through `Column::from_header`; unknown columns
/// are ignored. The booking number is the one field that must parse — a row
/// without a valid Buchungsnummer cannot be keyed and is rejected.
pub fn read_csv(path: &Path) -> AppResult<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::None)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let columns: Vec<Option<Column>> = headers.iter().map(Column::from_header).collect();

    if !columns.contains(&Some(Column::BookingNumber)) {
        return Err(AppError::MissingHeader("Buchungsnummer"));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = RawRow::default();
        let mut number: Option<i64> = None;

        for (idx, col) in columns.iter().enumerate() {
            let Some(col) = col else { continue };
            let value = record.get(idx).unwrap_or("").to_string();
            if *col == Column::BookingNumber {
                number = value.trim().parse::<i64>().ok();
                if number.is_none() {
                    return Err(AppError::InvalidBookingNumber(value));
                }
            } else {
                row.set(*col, value);
            }
        }

        match number {
            Some(n) => row.booking_number = n,
            None => return Err(AppError::InvalidBookingNumber(String::new())),
        }
        rows.push(row);
    }

    Ok(rows)
}
