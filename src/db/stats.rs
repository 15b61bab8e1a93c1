//! Database information report for `db --info`.

use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))?;
    println!(
        "{}• Total bookings:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    let cancelled: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM bookings WHERE cancelled_on <> ''",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Cancelled:{} {}", CYAN, RESET, cancelled);

    let first_arrival: Option<String> = pool
        .conn
        .query_row(
            "SELECT arrival FROM bookings WHERE arrival <> '' ORDER BY arrival ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_arrival: Option<String> = pool
        .conn
        .query_row(
            "SELECT arrival FROM bookings WHERE arrival <> '' ORDER BY arrival DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_arrival.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_arrival.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Check-in range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    Ok(())
}
