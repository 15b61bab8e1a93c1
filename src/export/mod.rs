//! Export of the stored booking set.

mod csv;
mod json;
mod xlsx;

pub use csv::write_csv;
pub use json::write_json;
pub use xlsx::write_xlsx;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Canonical export headers, matching the Booking.com export so a file
/// written here can be re-imported as-is.
pub(crate) const EXPORT_HEADERS: [&str; 27] = [
    "Buchungsnummer",
    "Gebucht von",
    "Gästename(n)",
    "Anreise",
    "Abreise",
    "Gebucht am",
    "Status",
    "Zimmer",
    "Personen",
    "Erwachsene",
    "Kinder",
    "Alter der Kinder",
    "Preis",
    "Kommission %",
    "Kommissionsbetrag",
    "Zahlungsstatus",
    "Zahlungsmethode (Zahlungsanbieter)",
    "Bemerkungen",
    "Buchergruppe",
    "Booker country",
    "Reisegrund",
    "Gerät",
    "Art der Wohneinheit",
    "Aufenthaltsdauer (Nächte)",
    "Stornierungsdatum",
    "Adresse",
    "Telefonnummer",
];

/// Shared helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}
