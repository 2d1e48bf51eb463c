use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};

use crate::core::Result;
use crate::modules::reports::models::SalesSummary;
use crate::modules::reports::services::aggregator::summarize;
use crate::modules::sales::repositories::SaleRecordSource;

/// Service for generating sales reports
///
/// Fetches the complete sale history from the record source and hands it to
/// the pure aggregator. This is the outermost caller, so it is the one
/// place the wall clock is read.
pub struct ReportService {
    sales: Arc<dyn SaleRecordSource>,
}

impl ReportService {
    pub fn new(sales: Arc<dyn SaleRecordSource>) -> Self {
        Self { sales }
    }

    /// Generate the sales summary for a user.
    ///
    /// `now` is injectable for deterministic output; `None` uses the local
    /// wall-clock time.
    pub async fn sales_summary(
        &self,
        user_id: &str,
        now: Option<NaiveDateTime>,
    ) -> Result<SalesSummary> {
        let now = now.unwrap_or_else(|| Local::now().naive_local());

        let sales = self.sales.sales_for_user(user_id).await?;

        info!(records = sales.len(), "Aggregating sales report");

        let summary = summarize(&sales, now);

        if summary.is_empty() {
            warn!(user_id = %user_id, "Sales report is empty");
        }

        Ok(summary)
    }
}
