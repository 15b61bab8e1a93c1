//! EUR amount parsing for Booking.com exports.
//!
//! Prices arrive as localized strings ("62.7 EUR", "1.234,56 EUR", "€ 45,00").
//! The parse itself is explicit and fallible; the decision to degrade a
//! malformed value to zero is taken once, in `Booking::from_raw`.

use crate::errors::{AppError, AppResult};

/// Parse a localized EUR string into a plain amount.
///
/// Strips an `EUR` suffix or `€` prefix and normalizes the decimal comma
/// to a dot before parsing.
pub fn parse_euro_amount(raw: &str) -> AppResult<f64> {
    let s = raw
        .trim()
        .trim_end_matches("EUR")
        .trim_start_matches('€')
        .trim();

    if s.is_empty() {
        return Err(AppError::InvalidAmount(raw.to_string()));
    }

    // "1.234,56" -> "1234.56"; a bare "62.7" stays as-is.
    let normalized = if s.contains(',') {
        s.replace('.', "").replace(',', ".")
    } else {
        s.to_string()
    };

    normalized
        .parse::<f64>()
        .map_err(|_| AppError::InvalidAmount(raw.to_string()))
}

/// Parse a percentage field ("12", "12,5"). Comma-decimal tolerant.
pub fn parse_percent(raw: &str) -> AppResult<f64> {
    let s = raw.trim().trim_end_matches('%').trim();
    if s.is_empty() {
        return Err(AppError::InvalidAmount(raw.to_string()));
    }
    s.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| AppError::InvalidAmount(raw.to_string()))
}
