use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::products::models::{CreateProductRequest, UpdateProductRequest};
use crate::modules::products::services::ProductService;

/// Create a new product
/// POST /products
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    request: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let product = service.create_product(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(product))
}

/// List all products
/// GET /products
pub async fn list_products(
    service: web::Data<Arc<ProductService>>,
) -> Result<HttpResponse, AppError> {
    let products = service.list_products().await?;

    Ok(HttpResponse::Ok().json(products))
}

/// Get product by ID
/// GET /products/{id}
pub async fn get_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product = service.get_product(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Update a product
/// PUT /products/{id}
pub async fn update_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<String>,
    request: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let product = service
        .update_product(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Delete a product
/// DELETE /products/{id}
pub async fn delete_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_product(&path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::post().to(create_product))
            .route("", web::get().to(list_products))
            .route("/{id}", web::get().to(get_product))
            .route("/{id}", web::put().to(update_product))
            .route("/{id}", web::delete().to(delete_product)),
    );
}
