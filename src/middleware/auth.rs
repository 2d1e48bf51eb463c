use crate::core::AppError;
use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use futures_util::future::LocalBoxFuture;
use sha2::{Digest, Sha256};
use sqlx::MySqlPool;
use std::future::{ready, Ready};
use std::rc::Rc;

/// Session token authentication middleware
///
/// Expects `Authorization: Bearer <token>` on every request except the
/// public endpoints (health, index, register, login). The token is hashed
/// and looked up in the sessions table; the owning user id is stored in
/// request extensions for handlers to extract.
pub struct BearerAuth {
    pool: MySqlPool,
}

impl BearerAuth {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
            pool: self.pool.clone(),
        }))
    }
}

pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
    pool: MySqlPool,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let pool = self.pool.clone();

        Box::pin(async move {
            // Skip authentication for public endpoints
            let path = req.path();
            if path == "/" || path == "/health" || path == "/auth/register" || path == "/auth/login"
            {
                return svc.call(req).await;
            }

            // Extract bearer token from Authorization header
            let token = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Bearer "))
                .ok_or_else(|| {
                    Error::from(AppError::unauthorized("Missing bearer token"))
                })?;

            // Validate session token against database
            let session = validate_session(&pool, token).await.map_err(Error::from)?;

            // Store authenticated user in request extensions for handlers
            req.extensions_mut().insert(AuthedUser {
                user_id: session.user_id,
            });

            svc.call(req).await
        })
    }
}

/// The authenticated user attached to a request by [`BearerAuth`].
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub user_id: String,
}

impl FromRequest for AuthedUser {
    type Error = Error;
    type Future = Ready<std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthedUser>()
                .cloned()
                .ok_or_else(|| {
                    Error::from(AppError::unauthorized("Missing authentication context"))
                }),
        )
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct SessionRecord {
    user_id: String,
}

async fn validate_session(pool: &MySqlPool, token: &str) -> crate::core::Result<SessionRecord> {
    let digest = token_digest(token);

    sqlx::query_as::<_, SessionRecord>(
        r#"
        SELECT user_id
        FROM sessions
        WHERE token_digest = ? AND expires_at > NOW()
        LIMIT 1
        "#,
    )
    .bind(digest)
    .fetch_optional(pool)
    .await
    .map_err(AppError::Database)?
    .ok_or_else(|| AppError::unauthorized("Invalid or expired session token"))
}

/// SHA-256 hex digest of a session token.
///
/// Raw tokens are never stored; the sessions table only holds digests.
pub fn token_digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Helper function to hash passwords using Argon2
pub fn hash_password(password: &str) -> crate::core::Result<String> {
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

/// Helper function to verify passwords using Argon2
pub fn verify_password(password: &str, hash: &str) -> crate::core::Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;

    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
