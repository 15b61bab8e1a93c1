//! Unified application error type.
//! All modules (db, import, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Import / ingestion
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] calamine::Error),

    #[error("Unsupported file format: {0} (use .csv, .xls or .xlsx)")]
    UnsupportedFormat(String),

    #[error("Missing column header: {0}")]
    MissingHeader(&'static str),

    #[error("Invalid booking number: {0}")]
    InvalidBookingNumber(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
