use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tillpoint::config::Config;
use tillpoint::middleware::BearerAuth;
use tillpoint::modules::products::controllers::product_controller;
use tillpoint::modules::products::{ProductRepository, ProductService};
use tillpoint::modules::reports::controllers::report_controller;
use tillpoint::modules::reports::ReportService;
use tillpoint::modules::sales::controllers::sale_controller;
use tillpoint::modules::sales::{SaleRepository, SaleService};
use tillpoint::modules::users::controllers::auth_controller;
use tillpoint::modules::users::{UserRepository, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tillpoint=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Tillpoint POS backend");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");

    // Build services
    let user_service = web::Data::new(Arc::new(UserService::new(
        UserRepository::new(db_pool.clone()),
        config.security.session_ttl_hours,
    )));
    let product_service = web::Data::new(Arc::new(ProductService::new(ProductRepository::new(
        db_pool.clone(),
    ))));

    let sale_repo = Arc::new(SaleRepository::new(db_pool.clone()));
    let sale_service = web::Data::new(Arc::new(SaleService::new(
        db_pool.clone(),
        sale_repo.clone(),
        Arc::new(ProductRepository::new(db_pool.clone())),
    )));
    let report_service = web::Data::new(Arc::new(ReportService::new(sale_repo)));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(BearerAuth::new(db_pool.clone()))
            .wrap(Cors::permissive())
            .app_data(user_service.clone())
            .app_data(product_service.clone())
            .app_data(sale_service.clone())
            .app_data(report_service.clone())
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
            .configure(auth_controller::configure)
            .configure(product_controller::configure)
            .configure(sale_controller::configure)
            .configure(report_controller::configure)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "tillpoint"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Tillpoint POS Backend",
        "version": "0.1.0",
        "status": "running"
    }))
}
