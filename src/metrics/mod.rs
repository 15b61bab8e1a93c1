//! Aggregate hotel performance metrics.
//!
//! Pure calculators over booking snapshots: no state, no I/O, no failure
//! modes. Empty or all-cancelled inputs yield a fully zeroed structure.

pub mod enhanced;

use crate::models::booking::Booking;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Default)]
pub struct HotelMetrics {
    pub total_revenue: f64,
    /// Active (non-cancelled) bookings only.
    pub total_bookings: usize,
    pub total_nights: u32,
    pub total_guests: u32,
    pub average_daily_rate: f64,
    pub occupancy_rate: f64,
    pub average_stay_length: f64,
    pub commission_total: f64,
    pub cancelled_bookings: usize,
    /// Revenue of cancelled bookings; never part of `total_revenue`.
    pub cancelled_revenue: f64,
    pub revenue_by_date: Vec<DateRevenue>,
    pub revenue_by_room: Vec<RoomRevenue>,
    pub bookings_by_country: Vec<CountryCount>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateRevenue {
    /// ISO date key (check-in day).
    pub date: String,
    pub revenue: f64,
    pub bookings: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoomRevenue {
    pub room: String,
    pub revenue: f64,
    pub bookings: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

/// Compute aggregate metrics from a booking snapshot.
///
/// Cancelled bookings are excluded from every revenue/nights/guests figure
/// and tracked separately. The occupancy span runs from the earliest to the
/// latest check-in of active bookings, inclusive.
pub fn calculate_metrics(bookings: &[Booking], total_rooms: u32) -> HotelMetrics {
    let active: Vec<&Booking> = bookings.iter().filter(|b| !b.is_cancelled).collect();
    let cancelled: Vec<&Booking> = bookings.iter().filter(|b| b.is_cancelled).collect();

    let total_revenue: f64 = active.iter().map(|b| b.revenue).sum();
    let total_nights: u32 = active.iter().map(|b| b.nights).sum();
    let total_guests: u32 = active.iter().map(|b| b.guests).sum();
    let commission_total: f64 = active.iter().map(|b| b.commission).sum();
    let cancelled_revenue: f64 = cancelled.iter().map(|b| b.revenue).sum();

    let average_daily_rate = if total_nights > 0 {
        total_revenue / f64::from(total_nights)
    } else {
        0.0
    };
    let average_stay_length = if active.is_empty() {
        0.0
    } else {
        f64::from(total_nights) / active.len() as f64
    };

    let occupancy_rate = match (
        active.iter().map(|b| b.check_in).min(),
        active.iter().map(|b| b.check_in).max(),
    ) {
        (Some(min), Some(max)) => {
            let span_days = (max - min).num_days() + 1;
            let room_nights = i64::from(total_rooms) * span_days;
            if room_nights > 0 {
                f64::from(total_nights) / room_nights as f64 * 100.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    };

    // Revenue per check-in day, ascending by date.
    let mut by_date: HashMap<String, (f64, usize)> = HashMap::new();
    for b in &active {
        let key = b.check_in.format("%Y-%m-%d").to_string();
        let entry = by_date.entry(key).or_insert((0.0, 0));
        entry.0 += b.revenue;
        entry.1 += 1;
    }
    let mut revenue_by_date: Vec<DateRevenue> = by_date
        .into_iter()
        .map(|(date, (revenue, bookings))| DateRevenue {
            date,
            revenue,
            bookings,
        })
        .collect();
    revenue_by_date.sort_by(|a, b| a.date.cmp(&b.date));

    // Revenue per unit type, first-occurrence order.
    let mut revenue_by_room: Vec<RoomRevenue> = Vec::new();
    for b in &active {
        match revenue_by_room.iter_mut().find(|r| r.room == b.unit_type) {
            Some(r) => {
                r.revenue += b.revenue;
                r.bookings += 1;
            }
            None => revenue_by_room.push(RoomRevenue {
                room: b.unit_type.clone(),
                revenue: b.revenue,
                bookings: 1,
            }),
        }
    }

    // Booking count per country, descending.
    let mut by_country: HashMap<String, usize> = HashMap::new();
    for b in &active {
        *by_country.entry(b.country.clone()).or_insert(0) += 1;
    }
    let mut bookings_by_country: Vec<CountryCount> = by_country
        .into_iter()
        .map(|(country, count)| CountryCount { country, count })
        .collect();
    bookings_by_country.sort_by(|a, b| b.count.cmp(&a.count).then(a.country.cmp(&b.country)));

    HotelMetrics {
        total_revenue,
        total_bookings: active.len(),
        total_nights,
        total_guests,
        average_daily_rate,
        occupancy_rate,
        average_stay_length,
        commission_total,
        cancelled_bookings: cancelled.len(),
        cancelled_revenue,
        revenue_by_date,
        revenue_by_room,
        bookings_by_country,
    }
}
