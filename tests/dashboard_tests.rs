//! Dashboard assembly: window filtering, trends and sparkline bucketing.

mod common;

use chrono::Days;
use common::{booking, date};
use roomledger::dashboard::{DateRange, Trend, assemble_at};

#[test]
fn range_filters_by_trailing_checkin_window() {
    let today = date(2026, 3, 15);
    let bookings = vec![
        booking(1, today - Days::new(2), 2, 100.0, false),
        booking(2, today - Days::new(20), 1, 50.0, false),
        booking(3, today - Days::new(95), 1, 70.0, false),
    ];

    let last7 = assemble_at(&bookings, DateRange::Last7, 10, today);
    assert_eq!(last7.metrics.total_bookings, 1);
    assert_eq!(last7.metrics.total_revenue, 100.0);

    let last30 = assemble_at(&bookings, DateRange::Last30, 10, today);
    assert_eq!(last30.metrics.total_bookings, 2);

    let all = assemble_at(&bookings, DateRange::All, 10, today);
    assert_eq!(all.metrics.total_bookings, 3);
}

#[test]
fn trend_compares_against_previous_window() {
    let today = date(2026, 3, 15);
    let bookings = vec![
        // current 7-day window
        booking(1, today - Days::new(1), 1, 200.0, false),
        // previous 7-day window
        booking(2, today - Days::new(10), 1, 100.0, false),
    ];

    let data = assemble_at(&bookings, DateRange::Last7, 10, today);
    assert_eq!(data.trends.revenue, Trend::Change(100.0));
    assert_eq!(data.trends.bookings, Trend::Change(0.0));
}

#[test]
fn trend_is_no_data_when_previous_window_empty() {
    let today = date(2026, 3, 15);
    let bookings = vec![booking(1, today - Days::new(1), 1, 200.0, false)];

    let data = assemble_at(&bookings, DateRange::Last7, 10, today);
    assert_eq!(data.trends.revenue, Trend::NoData);
    assert_eq!(data.trends.bookings, Trend::NoData);
    assert_eq!(data.trends.guests, Trend::NoData);
    assert_eq!(data.trends.nights, Trend::NoData);
}

#[test]
fn all_range_reports_no_trend() {
    let today = date(2026, 3, 15);
    let bookings = vec![
        booking(1, today - Days::new(1), 1, 200.0, false),
        booking(2, today - Days::new(10), 1, 100.0, false),
    ];
    let data = assemble_at(&bookings, DateRange::All, 10, today);
    assert_eq!(data.trends.revenue, Trend::NoData);
}

#[test]
fn sparkline_covers_seven_days_of_full_history() {
    let today = date(2026, 3, 15);
    let bookings = vec![
        booking(1, today, 2, 100.0, false),
        booking(2, today - Days::new(3), 1, 50.0, false),
        booking(3, today - Days::new(3), 1, 25.0, false),
        // outside the sparkline window
        booking(4, today - Days::new(9), 1, 999.0, false),
        // cancelled bookings never bucket
        booking(5, today, 1, 500.0, true),
    ];

    // sparkline ignores the selected range
    let data = assemble_at(&bookings, DateRange::Last90, 10, today);
    assert_eq!(data.sparkline.len(), 7);
    assert_eq!(data.sparkline[0].date, today - Days::new(6));
    assert_eq!(data.sparkline[6].date, today);

    assert_eq!(data.sparkline[6].revenue, 100.0);
    assert_eq!(data.sparkline[6].bookings, 1);
    assert_eq!(data.sparkline[3].revenue, 75.0);
    assert_eq!(data.sparkline[3].bookings, 2);

    let total: f64 = data.sparkline.iter().map(|p| p.revenue).sum();
    assert_eq!(total, 175.0);
}

#[test]
fn top_lists_are_sorted_and_truncated() {
    let today = date(2026, 3, 15);
    let mut bookings = Vec::new();
    for i in 0..12 {
        let mut b = booking(i, today - Days::new(u64::try_from(i).unwrap()), 1, 10.0 * (i + 1) as f64, false);
        b.unit_type = format!("Unit {i}");
        bookings.push(b);
    }

    let data = assemble_at(&bookings, DateRange::All, 10, today);
    assert_eq!(data.top_revenue_days.len(), 10);
    assert!(data.top_revenue_days[0].revenue >= data.top_revenue_days[1].revenue);
    assert_eq!(data.top_rooms.len(), 5);
    assert_eq!(data.top_rooms[0].room, "Unit 11");
}

#[test]
fn enhanced_metrics_follow_the_filtered_set() {
    let today = date(2026, 3, 15);
    let bookings = vec![
        booking(1, today - Days::new(1), 1, 200.0, false),
        booking(2, today - Days::new(2), 1, 100.0, true),
    ];
    let data = assemble_at(&bookings, DateRange::Last7, 10, today);
    assert_eq!(data.enhanced.cancellation_rate, 50.0);
}
