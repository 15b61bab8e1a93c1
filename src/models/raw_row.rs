//! As-imported booking record and export header canonicalization.
//!
//! Booking.com export headers are messy: some carry trailing whitespace
//! ("Gästename(n) ") and files re-encoded along the way show UTF-8 read as
//! Latin-1 ("Aufenthaltsdauer (NÃ¤chte)"). All of that is absorbed here, in
//! `Column::from_header`; raw header strings never travel past the importer.

use serde::{Deserialize, Serialize};

/// Canonical columns of a Booking.com reservation export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    BookingNumber,
    BookedBy,
    GuestName,
    Arrival,
    Departure,
    BookedOn,
    Status,
    Rooms,
    Persons,
    Adults,
    Children,
    ChildrenAges,
    Price,
    CommissionPercent,
    CommissionAmount,
    PaymentStatus,
    PaymentMethod,
    Remarks,
    BookerGroup,
    BookerCountry,
    TravelPurpose,
    Device,
    UnitType,
    Nights,
    CancelledOn,
    Address,
    Phone,
}

pub const ALL_COLUMNS: [Column; 27] = [
    Column::BookingNumber,
    Column::BookedBy,
    Column::GuestName,
    Column::Arrival,
    Column::Departure,
    Column::BookedOn,
    Column::Status,
    Column::Rooms,
    Column::Persons,
    Column::Adults,
    Column::Children,
    Column::ChildrenAges,
    Column::Price,
    Column::CommissionPercent,
    Column::CommissionAmount,
    Column::PaymentStatus,
    Column::PaymentMethod,
    Column::Remarks,
    Column::BookerGroup,
    Column::BookerCountry,
    Column::TravelPurpose,
    Column::Device,
    Column::UnitType,
    Column::Nights,
    Column::CancelledOn,
    Column::Address,
    Column::Phone,
];

/// Undo the common UTF-8-read-as-Latin-1 artifacts seen in re-saved exports.
fn demojibake(s: &str) -> String {
    s.replace("Ã¤", "ä")
        .replace("Ã¶", "ö")
        .replace("Ã¼", "ü")
        .replace("Ã„", "Ä")
        .replace("Ã–", "Ö")
        .replace("Ãœ", "Ü")
        .replace("ÃŸ", "ß")
}

impl Column {
    /// Map a raw spreadsheet header to a canonical column.
    /// Trims whitespace and repairs encoding artifacts before matching.
    pub fn from_header(raw: &str) -> Option<Self> {
        let h = demojibake(raw.trim());
        match h.as_str() {
            "Buchungsnummer" => Some(Self::BookingNumber),
            "Gebucht von" => Some(Self::BookedBy),
            "Gästename(n)" => Some(Self::GuestName),
            "Anreise" => Some(Self::Arrival),
            "Abreise" => Some(Self::Departure),
            "Gebucht am" => Some(Self::BookedOn),
            "Status" => Some(Self::Status),
            "Zimmer" => Some(Self::Rooms),
            "Personen" => Some(Self::Persons),
            "Erwachsene" => Some(Self::Adults),
            "Kinder" => Some(Self::Children),
            "Alter der Kinder" => Some(Self::ChildrenAges),
            "Preis" => Some(Self::Price),
            "Kommission %" => Some(Self::CommissionPercent),
            "Kommissionsbetrag" => Some(Self::CommissionAmount),
            "Zahlungsstatus" => Some(Self::PaymentStatus),
            "Zahlungsmethode (Zahlungsanbieter)" => Some(Self::PaymentMethod),
            "Bemerkungen" => Some(Self::Remarks),
            "Buchergruppe" => Some(Self::BookerGroup),
            "Booker country" => Some(Self::BookerCountry),
            "Reisegrund" => Some(Self::TravelPurpose),
            "Gerät" => Some(Self::Device),
            "Art der Wohneinheit" => Some(Self::UnitType),
            "Aufenthaltsdauer (Nächte)" => Some(Self::Nights),
            "Stornierungsdatum" => Some(Self::CancelledOn),
            "Adresse" => Some(Self::Address),
            "Telefonnummer" => Some(Self::Phone),
            _ => None,
        }
    }

    /// Canonical field name, used in diffs, exports and the DB schema.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BookingNumber => "booking_number",
            Self::BookedBy => "booked_by",
            Self::GuestName => "guest_name",
            Self::Arrival => "arrival",
            Self::Departure => "departure",
            Self::BookedOn => "booked_on",
            Self::Status => "status",
            Self::Rooms => "rooms",
            Self::Persons => "persons",
            Self::Adults => "adults",
            Self::Children => "children",
            Self::ChildrenAges => "children_ages",
            Self::Price => "price",
            Self::CommissionPercent => "commission_percent",
            Self::CommissionAmount => "commission_amount",
            Self::PaymentStatus => "payment_status",
            Self::PaymentMethod => "payment_method",
            Self::Remarks => "remarks",
            Self::BookerGroup => "booker_group",
            Self::BookerCountry => "booker_country",
            Self::TravelPurpose => "travel_purpose",
            Self::Device => "device",
            Self::UnitType => "unit_type",
            Self::Nights => "nights",
            Self::CancelledOn => "cancelled_on",
            Self::Address => "address",
            Self::Phone => "phone",
        }
    }
}

/// One raw export row, keyed by booking number.
/// Values are kept verbatim (empty string = absent) and never mutated after
/// capture; reconciliation compares these raw strings structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RawRow {
    pub booking_number: i64,
    pub booked_by: String,
    pub guest_name: String,
    pub arrival: String,
    pub departure: String,
    pub booked_on: String,
    pub status: String,
    pub rooms: String,
    pub persons: String,
    pub adults: String,
    pub children: String,
    pub children_ages: String,
    pub price: String,
    pub commission_percent: String,
    pub commission_amount: String,
    pub payment_status: String,
    pub payment_method: String,
    pub remarks: String,
    pub booker_group: String,
    pub booker_country: String,
    pub travel_purpose: String,
    pub device: String,
    pub unit_type: String,
    pub nights: String,
    pub cancelled_on: String,
    pub address: String,
    pub phone: String,
}

/// A single differing field between a stored row and a re-imported one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldChange {
    pub field: &'static str,
    pub old: String,
    pub new: String,
}

impl RawRow {
    pub fn get(&self, col: Column) -> &str {
        match col {
            Column::BookingNumber => "",
            Column::BookedBy => &self.booked_by,
            Column::GuestName => &self.guest_name,
            Column::Arrival => &self.arrival,
            Column::Departure => &self.departure,
            Column::BookedOn => &self.booked_on,
            Column::Status => &self.status,
            Column::Rooms => &self.rooms,
            Column::Persons => &self.persons,
            Column::Adults => &self.adults,
            Column::Children => &self.children,
            Column::ChildrenAges => &self.children_ages,
            Column::Price => &self.price,
            Column::CommissionPercent => &self.commission_percent,
            Column::CommissionAmount => &self.commission_amount,
            Column::PaymentStatus => &self.payment_status,
            Column::PaymentMethod => &self.payment_method,
            Column::Remarks => &self.remarks,
            Column::BookerGroup => &self.booker_group,
            Column::BookerCountry => &self.booker_country,
            Column::TravelPurpose => &self.travel_purpose,
            Column::Device => &self.device,
            Column::UnitType => &self.unit_type,
            Column::Nights => &self.nights,
            Column::CancelledOn => &self.cancelled_on,
            Column::Address => &self.address,
            Column::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, col: Column, value: String) {
        match col {
            Column::BookingNumber => {}
            Column::BookedBy => self.booked_by = value,
            Column::GuestName => self.guest_name = value,
            Column::Arrival => self.arrival = value,
            Column::Departure => self.departure = value,
            Column::BookedOn => self.booked_on = value,
            Column::Status => self.status = value,
            Column::Rooms => self.rooms = value,
            Column::Persons => self.persons = value,
            Column::Adults => self.adults = value,
            Column::Children => self.children = value,
            Column::ChildrenAges => self.children_ages = value,
            Column::Price => self.price = value,
            Column::CommissionPercent => self.commission_percent = value,
            Column::CommissionAmount => self.commission_amount = value,
            Column::PaymentStatus => self.payment_status = value,
            Column::PaymentMethod => self.payment_method = value,
            Column::Remarks => self.remarks = value,
            Column::BookerGroup => self.booker_group = value,
            Column::BookerCountry => self.booker_country = value,
            Column::TravelPurpose => self.travel_purpose = value,
            Column::Device => self.device = value,
            Column::UnitType => self.unit_type = value,
            Column::Nights => self.nights = value,
            Column::CancelledOn => self.cancelled_on = value,
            Column::Address => self.address = value,
            Column::Phone => self.phone = value,
        }
    }

    /// Field-for-field comparison against another row with the same booking
    /// number. Raw string equality only; no normalization at this stage.
    pub fn diff(&self, other: &RawRow) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        for col in ALL_COLUMNS {
            if col == Column::BookingNumber {
                continue;
            }
            let old = self.get(col);
            let new = other.get(col);
            if old != new {
                changes.push(FieldChange {
                    field: col.name(),
                    old: old.to_string(),
                    new: new.to_string(),
                });
            }
        }
        changes
    }
}
