use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::Local;
use serde::Serialize;

use crate::core::error::AppError;
use crate::middleware::auth::AuthedUser;
use crate::modules::reports::models::{SalesChartSet, SalesSummary};
use crate::modules::reports::services::{
    chart_series, document_filename, render_document, ReportService,
};

/// Response for the sales report endpoint: the raw summary plus the
/// chart-shaped series the client widgets consume.
#[derive(Debug, Serialize)]
pub struct SalesReportResponse {
    pub summary: SalesSummary,
    pub charts: SalesChartSet,
}

/// Sales summary and chart series for the authenticated user
/// GET /reports/sales
pub async fn get_sales_report(
    service: web::Data<Arc<ReportService>>,
    user: AuthedUser,
) -> Result<HttpResponse, AppError> {
    let summary = service.sales_summary(&user.user_id, None).await?;
    let charts = chart_series(&summary);

    Ok(HttpResponse::Ok().json(SalesReportResponse { summary, charts }))
}

/// Printable report document
/// GET /reports/sales/document
///
/// Serves the HTML source of the report; the platform print engine turns
/// it into the PDF named by the attachment filename.
pub async fn get_sales_report_document(
    service: web::Data<Arc<ReportService>>,
    user: AuthedUser,
) -> Result<HttpResponse, AppError> {
    let generated_at = Local::now().naive_local();
    let summary = service.sales_summary(&user.user_id, Some(generated_at)).await?;

    let document = render_document(&summary, generated_at);
    let filename = document_filename(generated_at);

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(document))
}

/// Configure report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/sales", web::get().to(get_sales_report))
            .route("/sales/document", web::get().to(get_sales_report_document)),
    );
}
