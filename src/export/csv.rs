use crate::errors::AppResult;
use crate::export::EXPORT_HEADERS;
use crate::models::raw_row::RawRow;
use csv::Writer;

/// Write the stored rows as CSV, re-import compatible.
pub fn write_csv(path: &str, rows: &[RawRow]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(EXPORT_HEADERS)?;

    for row in rows {
        wtr.write_record(&[
            row.booking_number.to_string(),
            row.booked_by.clone(),
            row.guest_name.clone(),
            row.arrival.clone(),
            row.departure.clone(),
            row.booked_on.clone(),
            row.status.clone(),
            row.rooms.clone(),
            row.persons.clone(),
            row.adults.clone(),
            row.children.clone(),
            row.children_ages.clone(),
            row.price.clone(),
            row.commission_percent.clone(),
            row.commission_amount.clone(),
            row.payment_status.clone(),
            row.payment_method.clone(),
            row.remarks.clone(),
            row.booker_group.clone(),
            row.booker_country.clone(),
            row.travel_purpose.clone(),
            row.device.clone(),
            row.unit_type.clone(),
            row.nights.clone(),
            row.cancelled_on.clone(),
            row.address.clone(),
            row.phone.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
