//! Excel (.xls/.xlsx) decoding for Booking.com exports.
//!
//! The workbook is reduced to the same string-valued rows the CSV path
//! produces, so everything downstream is format-agnostic.

use crate::errors::{AppError, AppResult};
use crate::models::raw_row::{Column, RawRow};
use calamine::{Data, Reader, open_workbook_auto};
use chrono::{Duration, NaiveDate};
use std::path::Path;

pub fn read_xlsx(path: &Path) -> AppResult<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .ok_or_else(|| AppError::Other("workbook has no sheets".to_string()))?
        .clone();

    let range = workbook.worksheet_range(&sheet_name)?;

    // Locate the header row within the first few rows and map columns.
    let mut header_row = None;
    let mut columns: Vec<Option<Column>> = Vec::new();
    for (row_idx, row) in range.rows().enumerate().take(10) {
        let mapped: Vec<Option<Column>> = row
            .iter()
            .map(|cell| Column::from_header(&cell.to_string()))
            .collect();
        if mapped.contains(&Some(Column::BookingNumber)) {
            header_row = Some(row_idx);
            columns = mapped;
            break;
        }
    }
    let header_row = header_row.ok_or(AppError::MissingHeader("Buchungsnummer"))?;

    let mut rows = Vec::new();
    for row in range.rows().skip(header_row + 1) {
        // Skip fully empty trailing rows.
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }

        let mut raw = RawRow::default();
        let mut number: Option<i64> = None;

        for (idx, col) in columns.iter().enumerate() {
            let Some(col) = col else { continue };
            let cell = row.get(idx).unwrap_or(&Data::Empty);
            if *col == Column::BookingNumber {
                number = cell_to_integer(cell);
                if number.is_none() {
                    return Err(AppError::InvalidBookingNumber(cell.to_string()));
                }
            } else {
                raw.set(*col, cell_to_string(cell, *col));
            }
        }

        match number {
            Some(n) => raw.booking_number = n,
            None => return Err(AppError::InvalidBookingNumber(String::new())),
        }
        rows.push(raw);
    }

    Ok(rows)
}

fn cell_to_integer(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) => Some(*f as i64),
        Data::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Stringify a cell the way the CSV export would have carried it.
/// Date cells stored as Excel serials become ISO dates.
fn cell_to_string(cell: &Data, col: Column) -> String {
    let is_date_column = matches!(
        col,
        Column::Arrival | Column::Departure | Column::BookedOn | Column::CancelledOn
    );

    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::DateTime(dt) => excel_serial_to_iso(dt.as_f64()),
        Data::Int(i) => {
            if is_date_column {
                excel_serial_to_iso(*i as f64)
            } else {
                i.to_string()
            }
        }
        Data::Float(f) => {
            if is_date_column {
                excel_serial_to_iso(*f)
            } else if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        other => other.to_string(),
    }
}

/// Excel serial day number to ISO date.
/// Day 0 is 1899-12-30 (the off-by-two accounts for Excel's 1900 leap bug).
fn excel_serial_to_iso(serial: f64) -> String {
    let base = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default();
    let date = base + Duration::days(serial as i64);
    date.format("%Y-%m-%d").to_string()
}
