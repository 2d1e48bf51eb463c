// Report presentation: chart-ready series and the printable document.
//
// The chart series substitute a minimum visual amount for buckets that are
// exactly zero so flat series still draw on the chart widget; the summary
// itself is never modified. The document is a self-contained HTML page the
// platform print engine turns into the shared PDF.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt::Write;

use crate::core::currency::format_amount;
use crate::modules::reports::models::{BucketTotal, ChartSeries, SalesChartSet, SalesSummary};

/// MIME type of the artifact the platform share sheet receives after the
/// print engine has converted the document.
pub const DOCUMENT_MIME: &str = "application/pdf";

/// Floor substituted into chart values for zero-amount buckets.
pub fn min_visible_amount() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

/// Shape the three summary series for chart widgets.
pub fn chart_series(summary: &SalesSummary) -> SalesChartSet {
    SalesChartSet {
        daily_trend: to_series(&summary.daily_trend),
        weekly_distribution: to_series(&summary.weekly_distribution),
        monthly_breakdown: to_series(&summary.monthly_breakdown),
    }
}

fn to_series(buckets: &[BucketTotal]) -> ChartSeries {
    ChartSeries {
        labels: buckets.iter().map(|bucket| bucket.label.clone()).collect(),
        values: buckets
            .iter()
            .map(|bucket| {
                if bucket.amount.is_zero() {
                    min_visible_amount()
                } else {
                    bucket.amount
                }
            })
            .collect(),
    }
}

/// Filename for the generated report artifact, embedding the generation
/// time: `tillpoint-sales-report-<MM-DD-YYYY>-<HH-MM>.pdf`.
pub fn document_filename(generated_at: NaiveDateTime) -> String {
    format!(
        "tillpoint-sales-report-{}.pdf",
        generated_at.format("%m-%d-%Y-%H-%M")
    )
}

/// Render the summary as a printable HTML document.
pub fn render_document(summary: &SalesSummary, generated_at: NaiveDateTime) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Sales Report</title>\n",
    );
    html.push_str(
        "<style>\nbody { font-family: sans-serif; margin: 2em; }\n\
         table { border-collapse: collapse; margin-bottom: 2em; }\n\
         th, td { border: 1px solid #ccc; padding: 6px 14px; text-align: left; }\n\
         td.amount { text-align: right; }\n</style>\n</head>\n<body>\n",
    );

    html.push_str("<h1>Sales Report</h1>\n");
    let _ = writeln!(
        html,
        "<p>Generated {}</p>",
        generated_at.format("%Y-%m-%d %H:%M")
    );

    html.push_str("<h2>Summary</h2>\n<table>\n");
    push_row(&mut html, "Today", summary.daily_total);
    push_row(&mut html, "Last 7 Days", summary.weekly_total);
    push_row(&mut html, "Last Month", summary.monthly_total);
    html.push_str("</table>\n");

    push_series_table(&mut html, "Daily Trend (Last 7 Days)", &summary.daily_trend);
    push_series_table(
        &mut html,
        "Sales by Weekday",
        &summary.weekly_distribution,
    );
    push_series_table(
        &mut html,
        "Monthly Breakdown (Last 6 Months)",
        &summary.monthly_breakdown,
    );

    html.push_str("</body>\n</html>\n");

    html
}

fn push_row(html: &mut String, label: &str, amount: Decimal) {
    let _ = writeln!(
        html,
        "<tr><th>{}</th><td class=\"amount\">{}</td></tr>",
        label,
        format_amount(amount)
    );
}

fn push_series_table(html: &mut String, title: &str, buckets: &[BucketTotal]) {
    let _ = writeln!(html, "<h2>{}</h2>", title);
    html.push_str("<table>\n");
    for bucket in buckets {
        push_row(html, &bucket.label, bucket.amount);
    }
    html.push_str("</table>\n");
}
