use crate::errors::{AppError, AppResult};
use crate::export::EXPORT_HEADERS;
use crate::models::raw_row::RawRow;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::io;
use std::path::Path;

/// XLSX export with a styled header row and banded data rows.
pub fn write_xlsx(path: &Path, rows: &[RawRow]) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_io_app_error)?;
        workbook.save(path_str(path)?).map_err(to_io_app_error)?;
        return Ok(());
    }

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, raw) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        let fmt = Format::new()
            .set_background_color(band_color)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        let values = row_values(raw);
        for (col, value) in values.iter().enumerate() {
            // Keep the booking number numeric; everything else verbatim.
            if col == 0 {
                worksheet
                    .write_with_format(row, col as u16, raw.booking_number as f64, &fmt)
                    .map_err(to_io_app_error)?;
            } else {
                worksheet
                    .write_with_format(row, col as u16, value.as_str(), &fmt)
                    .map_err(to_io_app_error)?;
            }
        }
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;
    Ok(())
}

fn row_values(row: &RawRow) -> [String; 27] {
    [
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
    ]
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
