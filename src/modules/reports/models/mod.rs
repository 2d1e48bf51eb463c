pub mod sales_summary;

pub use sales_summary::{BucketTotal, ChartSeries, SalesChartSet, SalesSummary};
