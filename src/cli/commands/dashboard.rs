//! `dashboard` command: print the KPI overview for the selected window.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::dashboard::{DashboardData, assemble};
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::ui::messages::header;
use crate::utils::formatting::{format_euro, format_percent};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { range } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let bookings: Vec<Booking> = store::get_all(&pool.conn)?
            .iter()
            .map(Booking::from_raw)
            .collect();

        let data = assemble(&bookings, *range, cfg.total_rooms);
        print_dashboard(cfg, &data);
    }
    Ok(())
}

fn print_dashboard(cfg: &Config, data: &DashboardData) {
    header(format!("{} — {}", cfg.hotel_name, data.range_label));

    let m = &data.metrics;
    let e = &data.enhanced;

    println!(
        "Total Revenue:      {:>12}   ({})",
        format_euro(m.total_revenue),
        data.trends.revenue.display()
    );
    println!(
        "Total Bookings:     {:>12}   ({})",
        m.total_bookings,
        data.trends.bookings.display()
    );
    println!(
        "Total Guests:       {:>12}   ({})",
        m.total_guests,
        data.trends.guests.display()
    );
    println!(
        "Room Nights:        {:>12}   ({})",
        m.total_nights,
        data.trends.nights.display()
    );
    println!();
    println!("Average Daily Rate: {:>12}", format_euro(m.average_daily_rate));
    println!("Avg Stay Length:    {:>9.2} nights", m.average_stay_length);
    println!(
        "Occupancy Rate:     {:>12}",
        format_percent(m.occupancy_rate)
    );
    println!(
        "Net Revenue:        {:>12}",
        format_euro(m.total_revenue - m.commission_total)
    );
    println!(
        "Cancelled:          {:>12}   ({} lost)",
        m.cancelled_bookings,
        format_euro(m.cancelled_revenue)
    );
    println!();
    println!("RevPAR:             {:>12}", format_euro(e.rev_par));
    println!(
        "Cancellation Rate:  {:>12}",
        format_percent(e.cancellation_rate)
    );
    println!(
        "Distribution Cost:  {:>12}",
        format_percent(e.distribution_cost)
    );
    println!(
        "Occupancy (30d):    {:>12}",
        format_percent(e.future_occupancy)
    );

    if !data.top_rooms.is_empty() {
        println!("\nTop units:");
        for room in &data.top_rooms {
            println!(
                "  {:<32} {:>10}  ({} bookings)",
                room.room,
                format_euro(room.revenue),
                room.bookings
            );
        }
    }

    if !e.revenue_by_country.is_empty() {
        println!("\nRevenue by country:");
        for c in &e.revenue_by_country {
            println!(
                "  {:<20} {:>10}  ({} bookings)",
                c.country,
                format_euro(c.revenue),
                c.bookings
            );
        }
    }

    println!("\nLast 7 days (revenue / bookings):");
    for point in &data.sparkline {
        println!(
            "  {}  {:>10}  {:>3}",
            point.date,
            format_euro(point.revenue),
            point.bookings
        );
    }
}
