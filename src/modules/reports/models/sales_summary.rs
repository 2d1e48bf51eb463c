use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One labeled bucket in a report series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketTotal {
    /// Display label: weekday abbreviation, weekday name, or month
    /// abbreviation depending on the series.
    pub label: String,
    pub amount: Decimal,
}

impl BucketTotal {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// The derived sales summary for one user at one point in time.
///
/// Recomputed in full from the complete sale history on every request;
/// never persisted, never updated incrementally. The caller owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Sales since the start of today.
    pub daily_total: Decimal,
    /// Sales in the trailing 168 hours.
    pub weekly_total: Decimal,
    /// Sales since one calendar month before today.
    pub monthly_total: Decimal,
    /// Last 7 calendar days, oldest first; labels are weekday
    /// abbreviations and the final entry is today.
    pub daily_trend: Vec<BucketTotal>,
    /// Trailing-week sales grouped by weekday, fixed Sunday..Saturday
    /// order; labels are full weekday names.
    pub weekly_distribution: Vec<BucketTotal>,
    /// Last 6 calendar months, oldest first; labels are month
    /// abbreviations and the final entry is the current month.
    pub monthly_breakdown: Vec<BucketTotal>,
}

impl SalesSummary {
    pub fn is_empty(&self) -> bool {
        self.daily_total.is_zero()
            && self.weekly_total.is_zero()
            && self.monthly_total.is_zero()
            && self
                .monthly_breakdown
                .iter()
                .all(|bucket| bucket.amount.is_zero())
    }
}

/// A labeled numeric series shaped for a chart widget
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<Decimal>,
}

/// The three chart-ready series derived from a [`SalesSummary`]
#[derive(Debug, Clone, Serialize)]
pub struct SalesChartSet {
    pub daily_trend: ChartSeries,
    pub weekly_distribution: ChartSeries,
    pub monthly_breakdown: ChartSeries,
}
