use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::AppResult;
use crate::models::booking::{Booking, StatusKind};
use crate::utils::colors::{GREEN, GREY, RED, RESET, YELLOW};
use crate::utils::formatting::format_euro;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        status,
        country,
        cancelled,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let bookings: Vec<Booking> = store::get_all(&pool.conn)?
            .iter()
            .map(Booking::from_raw)
            .collect();

        let filtered: Vec<&Booking> = bookings
            .iter()
            .filter(|b| match status {
                Some(s) => b.status.eq_ignore_ascii_case(s),
                None => true,
            })
            .filter(|b| match country {
                Some(c) => b.country.eq_ignore_ascii_case(c),
                None => true,
            })
            .filter(|b| !cancelled || b.is_cancelled)
            .collect();

        if filtered.is_empty() {
            println!("No bookings found.");
            return Ok(());
        }

        println!(
            "{:<12} {:<24} {:<11} {:<11} {:>7} {:>10}  {:<10}",
            "NUMBER", "GUEST", "CHECK-IN", "CHECK-OUT", "NIGHTS", "REVENUE", "STATUS"
        );
        for b in &filtered {
            println!(
                "{:<12} {:<24} {:<11} {:<11} {:>7} {:>10}  {}",
                b.booking_number,
                truncate(&b.guest_name, 24),
                b.check_in,
                b.check_out,
                b.nights,
                format_euro(b.revenue),
                status_cell(b),
            );
        }
        println!("\n{} booking(s)", filtered.len());
    }
    Ok(())
}

// Last column, so the ANSI codes never upset the padding.
fn status_cell(b: &Booking) -> String {
    let color = match b.status_kind() {
        StatusKind::Ok => GREEN,
        StatusKind::Cancelled => RED,
        StatusKind::Pending => YELLOW,
        StatusKind::Other => GREY,
    };
    format!("{color}{}{RESET}", b.status)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
