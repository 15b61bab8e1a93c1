//! Dashboard view data: trailing-window filtering, period-over-period trends
//! and 7-day sparklines on top of the metrics calculators.

use crate::metrics::enhanced::{EnhancedMetrics, calculate_enhanced_metrics_at};
use crate::metrics::{DateRevenue, HotelMetrics, RoomRevenue, calculate_metrics};
use crate::models::booking::Booking;
use crate::utils::date::today;
use chrono::{Days, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;

/// Trailing check-in window selectable on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DateRange {
    #[value(name = "7")]
    Last7,
    #[value(name = "30")]
    Last30,
    #[value(name = "90")]
    Last90,
    #[value(name = "all")]
    All,
}

impl DateRange {
    pub fn days(self) -> Option<u64> {
        match self {
            DateRange::Last7 => Some(7),
            DateRange::Last30 => Some(30),
            DateRange::Last90 => Some(90),
            DateRange::All => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Last7 => "last 7 days",
            DateRange::Last30 => "last 30 days",
            DateRange::Last90 => "last 90 days",
            DateRange::All => "all time",
        }
    }
}

/// Period-over-period change. `NoData` stands in whenever the previous
/// window is empty or zero-valued, so no caller ever sees NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Trend {
    NoData,
    Change(f64),
}

impl Trend {
    fn from_values(current: f64, previous: f64, previous_bookings: usize) -> Self {
        if previous_bookings == 0 || previous == 0.0 {
            Trend::NoData
        } else {
            Trend::Change((current - previous) / previous * 100.0)
        }
    }

    pub fn display(&self) -> String {
        match self {
            Trend::NoData => "n/a".to_string(),
            Trend::Change(pct) => format!("{:+.1}%", pct),
        }
    }
}

/// Trends for the four headline metrics.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Trends {
    pub revenue: Trend,
    pub bookings: Trend,
    pub guests: Trend,
    pub nights: Trend,
}

/// One daily sparkline bucket. The sparkline always covers the trailing
/// 7 calendar days of the full history, independent of the selected range.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SparklinePoint {
    pub date: NaiveDate,
    pub revenue: f64,
    pub bookings: usize,
    pub guests: u32,
    pub nights: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub range_label: &'static str,
    pub metrics: HotelMetrics,
    pub enhanced: EnhancedMetrics,
    pub trends: Trends,
    pub sparkline: Vec<SparklinePoint>,
    pub top_revenue_days: Vec<DateRevenue>,
    pub top_rooms: Vec<RoomRevenue>,
}

/// Assemble display-ready dashboard data from the full parsed booking set.
pub fn assemble(bookings: &[Booking], range: DateRange, total_rooms: u32) -> DashboardData {
    assemble_at(bookings, range, total_rooms, today())
}

/// `assemble` with an explicit "today" for deterministic windows under test.
pub fn assemble_at(
    bookings: &[Booking],
    range: DateRange,
    total_rooms: u32,
    today: NaiveDate,
) -> DashboardData {
    let current: Vec<Booking> = filter_window(bookings, range.days(), today, 0);

    let metrics = calculate_metrics(&current, total_rooms);
    let enhanced = calculate_enhanced_metrics_at(
        &current,
        metrics.total_revenue,
        metrics.commission_total,
        metrics.cancelled_bookings,
        total_rooms,
        today,
    );

    let trends = match range.days() {
        None => Trends {
            revenue: Trend::NoData,
            bookings: Trend::NoData,
            guests: Trend::NoData,
            nights: Trend::NoData,
        },
        Some(days) => {
            let previous_set = filter_window(bookings, Some(days), today, days);
            let previous = calculate_metrics(&previous_set, total_rooms);
            Trends {
                revenue: Trend::from_values(
                    metrics.total_revenue,
                    previous.total_revenue,
                    previous.total_bookings,
                ),
                bookings: Trend::from_values(
                    metrics.total_bookings as f64,
                    previous.total_bookings as f64,
                    previous.total_bookings,
                ),
                guests: Trend::from_values(
                    f64::from(metrics.total_guests),
                    f64::from(previous.total_guests),
                    previous.total_bookings,
                ),
                nights: Trend::from_values(
                    f64::from(metrics.total_nights),
                    f64::from(previous.total_nights),
                    previous.total_bookings,
                ),
            }
        }
    };

    let mut top_revenue_days = metrics.revenue_by_date.clone();
    top_revenue_days.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    top_revenue_days.truncate(10);

    let mut top_rooms = metrics.revenue_by_room.clone();
    top_rooms.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    top_rooms.truncate(5);

    DashboardData {
        range_label: range.label(),
        metrics,
        enhanced,
        trends,
        sparkline: sparkline(bookings, today),
        top_revenue_days,
        top_rooms,
    }
}

/// Bookings whose check-in falls in a trailing window of `days` ending
/// `offset` days before today (offset 0 = the current window, ending today
/// inclusive). `days = None` keeps everything.
fn filter_window(
    bookings: &[Booking],
    days: Option<u64>,
    today: NaiveDate,
    offset: u64,
) -> Vec<Booking> {
    let Some(days) = days else {
        return bookings.to_vec();
    };
    let end = today
        .checked_sub_days(Days::new(offset))
        .unwrap_or(today);
    let start = end.checked_sub_days(Days::new(days)).unwrap_or(end);

    bookings
        .iter()
        .filter(|b| b.check_in > start && b.check_in <= end)
        .cloned()
        .collect()
}

/// Daily buckets for the trailing 7 calendar days (today inclusive) over the
/// full history, active bookings only.
fn sparkline(bookings: &[Booking], today: NaiveDate) -> Vec<SparklinePoint> {
    (0..7u64)
        .rev()
        .map(|back| {
            let date = today.checked_sub_days(Days::new(back)).unwrap_or(today);
            let mut point = SparklinePoint {
                date,
                revenue: 0.0,
                bookings: 0,
                guests: 0,
                nights: 0,
            };
            for b in bookings.iter().filter(|b| !b.is_cancelled) {
                if b.check_in == date {
                    point.revenue += b.revenue;
                    point.bookings += 1;
                    point.guests += b.guests;
                    point.nights += b.nights;
                }
            }
            point
        })
        .collect()
}
