// Reports module: sales aggregation and report rendering

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{BucketTotal, ChartSeries, SalesChartSet, SalesSummary};
pub use services::{chart_series, document_filename, render_document, summarize, ReportService};
