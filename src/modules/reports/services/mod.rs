pub mod aggregator;
pub mod renderer;
pub mod report_service;

pub use aggregator::summarize;
pub use renderer::{chart_series, document_filename, render_document};
pub use report_service::ReportService;
