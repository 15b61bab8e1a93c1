//! Spreadsheet ingestion: decodes Booking.com export files into raw rows.
//!
//! Decoding stops at `RawRow`; nothing downstream ever sees file bytes or
//! raw header strings.

mod csv;
mod xlsx;

use crate::errors::{AppError, AppResult};
use crate::models::raw_row::RawRow;
use std::path::Path;

/// Read an export file, dispatching on the extension.
pub fn read_file(path: &Path) -> AppResult<Vec<RawRow>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => csv::read_csv(path),
        "xls" | "xlsx" => xlsx::read_xlsx(path),
        other => Err(AppError::UnsupportedFormat(other.to_string())),
    }
}
