use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::middleware::auth::AuthedUser;
use crate::modules::sales::models::CheckoutRequest;
use crate::modules::sales::services::{render_receipt, SaleService};

/// Check out a cart, creating a sale record
/// POST /sales/checkout
pub async fn checkout(
    service: web::Data<Arc<SaleService>>,
    user: AuthedUser,
    request: web::Json<CheckoutRequest>,
) -> Result<HttpResponse, AppError> {
    let sale = service.checkout(&user.user_id, request.into_inner()).await?;

    Ok(HttpResponse::Created().json(sale))
}

/// List the user's sale history
/// GET /sales
pub async fn list_sales(
    service: web::Data<Arc<SaleService>>,
    user: AuthedUser,
) -> Result<HttpResponse, AppError> {
    let sales = service.list_sales(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(sales))
}

/// Get a sale by ID with its line items
/// GET /sales/{id}
pub async fn get_sale(
    service: web::Data<Arc<SaleService>>,
    user: AuthedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let sale = service.get_sale(&path.into_inner(), &user.user_id).await?;

    Ok(HttpResponse::Ok().json(sale))
}

/// Plain-text receipt for a sale
/// GET /sales/{id}/receipt
pub async fn get_receipt(
    service: web::Data<Arc<SaleService>>,
    user: AuthedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let sale = service.get_sale(&path.into_inner(), &user.user_id).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(render_receipt(&sale)))
}

/// Configure sale routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sales")
            .route("/checkout", web::post().to(checkout))
            .route("", web::get().to(list_sales))
            .route("/{id}", web::get().to(get_sale))
            .route("/{id}/receipt", web::get().to(get_receipt)),
    );
}
