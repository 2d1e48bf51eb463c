use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::middleware::auth::AuthedUser;
use crate::modules::users::models::{LoginRequest, RegisterRequest};
use crate::modules::users::services::UserService;

/// Register a new user
/// POST /auth/register
pub async fn register(
    service: web::Data<Arc<UserService>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.register(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

/// Log in and receive a session token
/// POST /auth/login
pub async fn login(
    service: web::Data<Arc<UserService>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.login(request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Profile of the authenticated user
/// GET /auth/me
pub async fn me(
    service: web::Data<Arc<UserService>>,
    user: AuthedUser,
) -> Result<HttpResponse, AppError> {
    let profile = service.me(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// Configure auth routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/me", web::get().to(me)),
    );
}
