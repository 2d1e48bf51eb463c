// Unit tests for report presentation: chart series shaping and the
// printable HTML document.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

use tillpoint::modules::reports::services::renderer::min_visible_amount;
use tillpoint::modules::reports::services::{
    chart_series, document_filename, render_document, summarize,
};
use tillpoint::modules::sales::models::Sale;

fn dt(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn sale(recorded_at: NaiveDateTime, amount: rust_decimal::Decimal) -> Sale {
    Sale {
        id: "sale-1".to_string(),
        user_id: "user-1".to_string(),
        total_amount: amount,
        recorded_at,
        items: vec![],
    }
}

#[test]
fn chart_series_floor_zero_buckets() {
    let now = dt(2024, 3, 15, 10, 0);
    let summary = summarize(&[sale(dt(2024, 3, 15, 9, 0), dec!(100))], now);

    let charts = chart_series(&summary);

    // Six of the seven trend days have no sales; they get the visual floor
    // instead of zero so the chart still draws them.
    assert_eq!(charts.daily_trend.values.len(), 7);
    for value in &charts.daily_trend.values[..6] {
        assert_eq!(*value, min_visible_amount());
    }
    assert_eq!(charts.daily_trend.values[6], dec!(100));

    // The substitution is presentation-only.
    assert!(summary.daily_trend[..6].iter().all(|b| b.amount.is_zero()));
}

#[test]
fn chart_series_preserve_labels_and_order() {
    let now = dt(2024, 3, 15, 10, 0);
    let summary = summarize(&[], now);

    let charts = chart_series(&summary);

    assert_eq!(
        charts.weekly_distribution.labels,
        vec![
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday"
        ]
    );
    assert_eq!(
        charts.monthly_breakdown.labels,
        vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]
    );
    assert_eq!(charts.daily_trend.labels.len(), 7);
}

#[test]
fn document_filename_embeds_generation_time() {
    assert_eq!(
        document_filename(dt(2024, 3, 15, 10, 5)),
        "tillpoint-sales-report-03-15-2024-10-05.pdf"
    );
    assert_eq!(
        document_filename(dt(2025, 12, 1, 0, 0)),
        "tillpoint-sales-report-12-01-2025-00-00.pdf"
    );
}

#[test]
fn document_embeds_formatted_totals_and_series() {
    let now = dt(2024, 3, 15, 10, 0);
    let sales = vec![
        sale(dt(2024, 3, 15, 9, 0), dec!(1234.5)),
        sale(dt(2024, 2, 1, 9, 0), dec!(200)),
    ];
    let summary = summarize(&sales, now);

    let html = render_document(&summary, now);

    assert!(html.contains("<h1>Sales Report</h1>"));
    assert!(html.contains("Generated 2024-03-15 10:00"));

    // Currency formatting: glyph prefix, thousands separators, 2 decimals.
    assert!(html.contains("$1,234.50"));

    // All three series render as tables with their labels.
    assert!(html.contains("Daily Trend (Last 7 Days)"));
    assert!(html.contains("Sales by Weekday"));
    assert!(html.contains("Monthly Breakdown (Last 6 Months)"));
    assert!(html.contains("<th>Friday</th>"));
    assert!(html.contains("<th>Feb</th>"));

    // Zero buckets appear as $0.00 in the document (no chart floor here).
    assert!(html.contains("$0.00"));
}

#[test]
fn document_renders_for_empty_history() {
    let now = dt(2024, 3, 15, 10, 0);
    let summary = summarize(&[], now);

    let html = render_document(&summary, now);

    assert!(html.contains("$0.00"));
    assert!(html.contains("<th>Sunday</th>"));
}
