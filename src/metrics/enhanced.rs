//! Derived hospitality KPIs: RevPAR, cancellation rate, distribution cost,
//! forward-looking occupancy and the country revenue breakdown.
//!
//! Each figure is computed independently from the booking snapshot and the
//! pre-aggregated totals; none depends on another's result.

use crate::models::booking::Booking;
use crate::utils::date::today;
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

/// Forward window for `future_occupancy`, in days from today.
pub const FUTURE_WINDOW_DAYS: u64 = 30;

#[derive(Debug, Clone, Serialize, Default)]
pub struct EnhancedMetrics {
    pub rev_par: f64,
    pub cancellation_rate: f64,
    pub distribution_cost: f64,
    pub future_occupancy: f64,
    pub revenue_by_country: Vec<CountryRevenue>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryRevenue {
    pub country: String,
    pub revenue: f64,
    pub bookings: usize,
}

/// Compute all enhanced KPIs against the current calendar day.
pub fn calculate_enhanced_metrics(
    bookings: &[Booking],
    total_revenue: f64,
    total_commission: f64,
    cancelled_count: usize,
    total_rooms: u32,
) -> EnhancedMetrics {
    calculate_enhanced_metrics_at(
        bookings,
        total_revenue,
        total_commission,
        cancelled_count,
        total_rooms,
        today(),
    )
}

/// Same as `calculate_enhanced_metrics` with an explicit "today", so the
/// forward-looking window is deterministic under test.
pub fn calculate_enhanced_metrics_at(
    bookings: &[Booking],
    total_revenue: f64,
    total_commission: f64,
    cancelled_count: usize,
    total_rooms: u32,
    today: NaiveDate,
) -> EnhancedMetrics {
    EnhancedMetrics {
        rev_par: rev_par(total_revenue, total_rooms, days_in_period(bookings)),
        cancellation_rate: cancellation_rate(cancelled_count, bookings.len()),
        distribution_cost: distribution_cost(total_commission, total_revenue),
        future_occupancy: future_occupancy(bookings, total_rooms, today),
        revenue_by_country: revenue_by_country(bookings),
    }
}

/// RevPAR = revenue / (rooms × days in period).
pub fn rev_par(total_revenue: f64, total_rooms: u32, days_in_period: i64) -> f64 {
    if total_rooms == 0 || days_in_period == 0 {
        return 0.0;
    }
    total_revenue / (f64::from(total_rooms) * days_in_period as f64)
}

pub fn cancellation_rate(cancelled: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    cancelled as f64 / total as f64 * 100.0
}

/// Channel commission as a percentage of gross revenue.
pub fn distribution_cost(total_commission: f64, total_revenue: f64) -> f64 {
    if total_revenue == 0.0 {
        return 0.0;
    }
    total_commission / total_revenue * 100.0
}

/// Occupancy over the window [today, today + FUTURE_WINDOW_DAYS).
///
/// Only nights inside the window count: a stay reaching past the window end
/// is clipped to the days remaining between check-in and the window end.
pub fn future_occupancy(bookings: &[Booking], total_rooms: u32, today: NaiveDate) -> f64 {
    let window_end = today
        .checked_add_days(Days::new(FUTURE_WINDOW_DAYS))
        .unwrap_or(today);

    let future_nights: i64 = bookings
        .iter()
        .filter(|b| !b.is_cancelled && b.check_in >= today && b.check_in < window_end)
        .map(|b| {
            let until_end = (window_end - b.check_in).num_days();
            i64::from(b.nights).min(until_end).max(0)
        })
        .sum();

    let available = i64::from(total_rooms) * FUTURE_WINDOW_DAYS as i64;
    if available == 0 {
        return 0.0;
    }
    future_nights as f64 / available as f64 * 100.0
}

/// Revenue and booking count per country over active bookings, revenue
/// descending. Empty country falls back to "Unknown".
pub fn revenue_by_country(bookings: &[Booking]) -> Vec<CountryRevenue> {
    let mut map: HashMap<String, (f64, usize)> = HashMap::new();
    for b in bookings.iter().filter(|b| !b.is_cancelled) {
        let country = if b.country.is_empty() {
            "Unknown".to_string()
        } else {
            b.country.clone()
        };
        let entry = map.entry(country).or_insert((0.0, 0));
        entry.0 += b.revenue;
        entry.1 += 1;
    }

    let mut out: Vec<CountryRevenue> = map
        .into_iter()
        .map(|(country, (revenue, bookings))| CountryRevenue {
            country,
            revenue,
            bookings,
        })
        .collect();
    out.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.country.cmp(&b.country))
    });
    out
}

/// Observed period length for RevPAR: earliest active check-in to latest
/// active check-out, minimum one day; 0 when there are no active bookings.
pub fn days_in_period(bookings: &[Booking]) -> i64 {
    let active: Vec<&Booking> = bookings.iter().filter(|b| !b.is_cancelled).collect();
    if active.is_empty() {
        return 0;
    }
    let min_in = active.iter().map(|b| b.check_in).min();
    let max_out = active.iter().map(|b| b.check_out).max();
    match (min_in, max_out) {
        (Some(min), Some(max)) => {
            let days = (max - min).num_days();
            if days > 0 { days } else { 1 }
        }
        _ => 0,
    }
}
