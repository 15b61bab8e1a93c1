use crate::errors::{AppError, AppResult};
use crate::models::raw_row::RawRow;
use std::fs::File;
use std::io::BufWriter;

/// Write the stored rows as pretty-printed JSON.
pub fn write_json(path: &str, rows: &[RawRow]) -> AppResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, rows)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {e}")))?;
    Ok(())
}
