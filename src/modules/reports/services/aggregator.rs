// Sales report aggregation.
//
// `summarize` is a pure function of the sale list and an explicit `now`;
// the wall clock is read only by the outermost caller (the report
// service). It is total over its domain: an empty history yields zero
// scalars and zero-filled, fully labeled buckets.
//
// Window semantics, preserved deliberately:
// - the weekly window is a literal 168-hour subtraction from the start of
//   today, not 7 calendar days;
// - daily buckets are end-exclusive on the next midnight, monthly buckets
//   are end-inclusive on the month's last day;
// - the weekday distribution reuses the trailing-week cutoff rather than
//   bucketing all history.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rust_decimal::Decimal;

use crate::modules::reports::models::{BucketTotal, SalesSummary};
use crate::modules::sales::models::Sale;

/// Days covered by the daily trend series.
pub const TREND_DAYS: u32 = 7;

/// Months covered by the monthly breakdown series.
pub const BREAKDOWN_MONTHS: u32 = 6;

/// Canonical weekday order for the distribution series.
const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Build the sales summary for `sales` as seen from `now`.
pub fn summarize(sales: &[Sale], now: NaiveDateTime) -> SalesSummary {
    let today = start_of_day(now);
    let week_ago = today - Duration::days(7);
    let month_ago = month_earlier(today.date(), 1).and_time(NaiveTime::MIN);

    let daily_total = sum_where(sales, |sale| sale.recorded_at >= today);
    let weekly_total = sum_where(sales, |sale| sale.recorded_at >= week_ago);
    let monthly_total = sum_where(sales, |sale| sale.recorded_at >= month_ago);

    // Oldest day first: iterate from six days back up to today.
    let mut daily_trend = Vec::with_capacity(TREND_DAYS as usize);
    for offset in (0..TREND_DAYS as i64).rev() {
        let day_start = today - Duration::days(offset);
        let day_end = day_start + Duration::days(1);
        let amount = sum_where(sales, |sale| {
            sale.recorded_at >= day_start && sale.recorded_at < day_end
        });
        daily_trend.push(BucketTotal::new(day_start.format("%a").to_string(), amount));
    }

    // Fixed Sunday..Saturday order over the trailing-week window.
    let weekly_distribution = WEEK
        .iter()
        .map(|&weekday| {
            let amount = sum_where(sales, |sale| {
                sale.recorded_at >= week_ago && sale.recorded_at.weekday() == weekday
            });
            BucketTotal::new(weekday_name(weekday), amount)
        })
        .collect();

    // Oldest month first: whole calendar months, last day inclusive.
    let mut monthly_breakdown = Vec::with_capacity(BREAKDOWN_MONTHS as usize);
    for offset in (0..BREAKDOWN_MONTHS).rev() {
        let (month_start, month_end) = month_window(today.date(), offset);
        let amount = sum_where(sales, |sale| {
            sale.recorded_at.date() >= month_start && sale.recorded_at.date() <= month_end
        });
        monthly_breakdown.push(BucketTotal::new(month_start.format("%b").to_string(), amount));
    }

    SalesSummary {
        daily_total,
        weekly_total,
        monthly_total,
        daily_trend,
        weekly_distribution,
        monthly_breakdown,
    }
}

fn sum_where(sales: &[Sale], predicate: impl Fn(&Sale) -> bool) -> Decimal {
    sales
        .iter()
        .filter(|sale| predicate(sale))
        .map(|sale| sale.total_amount)
        .sum()
}

/// Midnight at the start of `now`'s calendar day.
fn start_of_day(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN)
}

/// `date` moved back by whole months, clamping the day-of-month to the
/// target month's last valid day (Mar 31 minus one month is Feb 29 in a
/// leap year, Feb 28 otherwise).
fn month_earlier(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(date)
}

/// First and last day of the calendar month `offset` months before the
/// month containing `anchor`.
fn month_window(anchor: NaiveDate, offset: u32) -> (NaiveDate, NaiveDate) {
    let first_of_anchor_month = anchor.with_day(1).unwrap_or(anchor);
    let start = month_earlier(first_of_anchor_month, offset);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(start);
    (start, end)
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}
