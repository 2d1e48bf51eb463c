// Unit tests for the sales report aggregation.
//
// The aggregator is a pure function of (sales, now), so everything here
// runs without a database: sale records are built in memory with fixed
// timestamps and the clock is passed explicitly.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tillpoint::modules::reports::services::summarize;
use tillpoint::modules::sales::models::Sale;

fn dt(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn sale(recorded_at: NaiveDateTime, amount: Decimal) -> Sale {
    Sale {
        id: format!("sale-{}-{}", recorded_at, amount),
        user_id: "user-1".to_string(),
        total_amount: amount,
        recorded_at,
        items: vec![],
    }
}

#[test]
fn empty_history_yields_zero_filled_summary() {
    let now = dt(2024, 3, 15, 10, 0);
    let summary = summarize(&[], now);

    assert_eq!(summary.daily_total, dec!(0));
    assert_eq!(summary.weekly_total, dec!(0));
    assert_eq!(summary.monthly_total, dec!(0));

    assert_eq!(summary.daily_trend.len(), 7);
    assert_eq!(summary.weekly_distribution.len(), 7);
    assert_eq!(summary.monthly_breakdown.len(), 6);

    assert!(summary.daily_trend.iter().all(|b| b.amount == dec!(0)));
    assert!(summary
        .weekly_distribution
        .iter()
        .all(|b| b.amount == dec!(0)));
    assert!(summary
        .monthly_breakdown
        .iter()
        .all(|b| b.amount == dec!(0)));

    // Labels are still fully populated
    let weekday_labels: Vec<_> = summary
        .weekly_distribution
        .iter()
        .map(|b| b.label.as_str())
        .collect();
    assert_eq!(
        weekday_labels,
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

    let month_labels: Vec<_> = summary
        .monthly_breakdown
        .iter()
        .map(|b| b.label.as_str())
        .collect();
    assert_eq!(month_labels, vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]);
}

#[test]
fn concrete_mid_march_scenario() {
    // 2024-03-15 is a Friday.
    let now = dt(2024, 3, 15, 10, 0);
    let sales = vec![
        sale(dt(2024, 3, 15, 9, 0), dec!(100)),
        sale(dt(2024, 3, 8, 9, 0), dec!(50)),
        sale(dt(2024, 2, 1, 9, 0), dec!(200)),
    ];

    let summary = summarize(&sales, now);

    assert_eq!(summary.daily_total, dec!(100));

    // The weekly window starts exactly 168h before midnight: 03-08 00:00,
    // so the 03-08 09:00 sale is inside it.
    assert_eq!(summary.weekly_total, dec!(150));

    // The monthly window starts on 02-15 (one calendar month before
    // today), which excludes the 02-01 sale.
    assert_eq!(summary.monthly_total, dec!(150));

    // Trend covers 03-09 through 03-15; only today's sale lands in it.
    let trend_amounts: Vec<_> = summary.daily_trend.iter().map(|b| b.amount).collect();
    assert_eq!(
        trend_amounts,
        vec![
            dec!(0),
            dec!(0),
            dec!(0),
            dec!(0),
            dec!(0),
            dec!(0),
            dec!(100)
        ]
    );
    assert_eq!(summary.daily_trend.last().unwrap().label, "Fri");

    // Both in-window sales happened on Fridays.
    let friday = &summary.weekly_distribution[5];
    assert_eq!(friday.label, "Friday");
    assert_eq!(friday.amount, dec!(150));
    let distributed: Decimal = summary.weekly_distribution.iter().map(|b| b.amount).sum();
    assert_eq!(distributed, summary.weekly_total);

    // Calendar-month buckets, oldest first.
    let by_label: Vec<_> = summary
        .monthly_breakdown
        .iter()
        .map(|b| (b.label.as_str(), b.amount))
        .collect();
    assert_eq!(
        by_label,
        vec![
            ("Oct", dec!(0)),
            ("Nov", dec!(0)),
            ("Dec", dec!(0)),
            ("Jan", dec!(0)),
            ("Feb", dec!(200)),
            ("Mar", dec!(150)),
        ]
    );
}

#[test]
fn daily_trend_sum_is_not_weekly_total() {
    // The trend buckets cover the 7 calendar days ending today; the weekly
    // total covers the trailing 168 hours. A sale early on the eighth day
    // back from midnight is in the weekly window but outside the trend.
    let now = dt(2024, 3, 15, 10, 0);
    let sales = vec![
        sale(dt(2024, 3, 15, 9, 0), dec!(100)),
        sale(dt(2024, 3, 8, 9, 0), dec!(50)),
    ];

    let summary = summarize(&sales, now);

    let trend_sum: Decimal = summary.daily_trend.iter().map(|b| b.amount).sum();
    assert_eq!(trend_sum, dec!(100));
    assert_eq!(summary.weekly_total, dec!(150));
    assert_ne!(trend_sum, summary.weekly_total);
}

#[test]
fn midnight_boundary_is_inclusive_for_daily_total() {
    let now = dt(2024, 3, 15, 10, 0);
    let at_midnight = sale(dt(2024, 3, 15, 0, 0), dec!(10));
    let just_before = sale(
        NaiveDate::from_ymd_opt(2024, 3, 14)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap(),
        dec!(20),
    );

    let summary = summarize(&[at_midnight, just_before], now);

    assert_eq!(summary.daily_total, dec!(10));
}

#[test]
fn sales_later_today_count_toward_today() {
    // The today bucket runs to the next midnight, not to `now`.
    let now = dt(2024, 3, 15, 10, 0);
    let evening = sale(dt(2024, 3, 15, 23, 0), dec!(40));

    let summary = summarize(&[evening], now);

    assert_eq!(summary.daily_total, dec!(40));
    assert_eq!(summary.daily_trend.last().unwrap().amount, dec!(40));
}

#[test]
fn month_windows_are_inclusive_of_last_day() {
    let now = dt(2024, 3, 15, 10, 0);
    // Last instant of February still belongs to the February bucket.
    let sales = vec![sale(dt(2024, 2, 29, 23, 59), dec!(75))];

    let summary = summarize(&sales, now);

    let february = &summary.monthly_breakdown[4];
    assert_eq!(february.label, "Feb");
    assert_eq!(february.amount, dec!(75));
}

#[test]
fn monthly_window_clamps_at_short_months() {
    // One calendar month before 03-31 clamps to 02-29 in a leap year.
    let now = dt(2024, 3, 31, 12, 0);
    let sales = vec![
        sale(dt(2024, 2, 29, 0, 0), dec!(30)),
        sale(dt(2024, 2, 28, 23, 59), dec!(999)),
    ];

    let summary = summarize(&sales, now);

    assert_eq!(summary.monthly_total, dec!(30));
}

#[test]
fn aggregates_ignore_input_order() {
    let now = dt(2024, 3, 15, 10, 0);
    let mut sales = vec![
        sale(dt(2024, 3, 15, 9, 0), dec!(100)),
        sale(dt(2024, 3, 8, 9, 0), dec!(50)),
        sale(dt(2024, 2, 1, 9, 0), dec!(200)),
    ];

    let forward = summarize(&sales, now);
    sales.reverse();
    let reversed = summarize(&sales, now);

    assert_eq!(forward, reversed);
}

proptest! {
    #[test]
    fn summary_shape_holds_for_any_clock(
        year in 2015i32..2035,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
    ) {
        let now = dt(year, month, day, hour, minute);
        let summary = summarize(&[], now);

        prop_assert_eq!(summary.daily_trend.len(), 7);
        prop_assert_eq!(summary.weekly_distribution.len(), 7);
        prop_assert_eq!(summary.monthly_breakdown.len(), 6);

        // The final trend entry is today.
        let today_label = now.date().format("%a").to_string();
        prop_assert_eq!(&summary.daily_trend.last().unwrap().label, &today_label);

        // The final breakdown entry is the current month, the first is
        // five months earlier.
        let this_month = now.date().format("%b").to_string();
        prop_assert_eq!(&summary.monthly_breakdown.last().unwrap().label, &this_month);
        let oldest = now
            .date()
            .with_day(1)
            .unwrap()
            .checked_sub_months(chrono::Months::new(5))
            .unwrap();
        prop_assert_eq!(
            &summary.monthly_breakdown[0].label,
            &oldest.format("%b").to_string()
        );
    }

    #[test]
    fn aggregation_is_idempotent(
        entries in proptest::collection::vec(
            (0i64..5_000_000, -200i64 * 86_400..2 * 86_400),
            0..40,
        )
    ) {
        let now = dt(2024, 3, 15, 10, 0);
        let sales: Vec<Sale> = entries
            .iter()
            .map(|&(cents, offset)| {
                sale(now + Duration::seconds(offset), Decimal::new(cents, 2))
            })
            .collect();

        let first = summarize(&sales, now);
        let second = summarize(&sales, now);

        // Byte-identical output for identical input.
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn weekly_distribution_accounts_for_the_weekly_total(
        entries in proptest::collection::vec(
            (0i64..5_000_000, -30i64 * 86_400..86_400),
            0..40,
        )
    ) {
        let now = dt(2024, 3, 15, 10, 0);
        let sales: Vec<Sale> = entries
            .iter()
            .map(|&(cents, offset)| {
                sale(now + Duration::seconds(offset), Decimal::new(cents, 2))
            })
            .collect();

        let summary = summarize(&sales, now);

        // Both derive from the same trailing-week cutoff, so the weekday
        // buckets always partition the weekly total.
        let distributed: Decimal =
            summary.weekly_distribution.iter().map(|b| b.amount).sum();
        prop_assert_eq!(distributed, summary.weekly_total);
    }

    #[test]
    fn totals_are_non_negative_and_monotone(
        entries in proptest::collection::vec(
            (0i64..5_000_000, -200i64 * 86_400..86_400),
            0..40,
        )
    ) {
        let now = dt(2024, 3, 15, 10, 0);
        let sales: Vec<Sale> = entries
            .iter()
            .map(|&(cents, offset)| {
                sale(now + Duration::seconds(offset), Decimal::new(cents, 2))
            })
            .collect();

        let summary = summarize(&sales, now);

        prop_assert!(summary.daily_total >= Decimal::ZERO);
        // Wider windows can only add sales.
        prop_assert!(summary.weekly_total >= summary.daily_total);
        prop_assert!(summary.monthly_total >= summary.weekly_total);
    }
}
