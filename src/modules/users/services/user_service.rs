use tracing::{info, warn};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::middleware::auth::{hash_password, token_digest, verify_password};
use crate::modules::users::models::{
    validate_password, LoginRequest, LoginResponse, RegisterRequest, Session, User, UserResponse,
};
use crate::modules::users::repositories::UserRepository;

/// Service for registration, login, and profile lookup
pub struct UserService {
    user_repo: UserRepository,
    session_ttl_hours: u32,
}

impl UserService {
    pub fn new(user_repo: UserRepository, session_ttl_hours: u32) -> Self {
        Self {
            user_repo,
            session_ttl_hours,
        }
    }

    /// Register a new user account
    pub async fn register(&self, request: RegisterRequest) -> Result<UserResponse> {
        validate_password(&request.password)?;

        let password_hash = hash_password(&request.password)?;
        let user = User::new(request.username, password_hash)?;

        self.user_repo.create(&user).await?;

        info!(username = %user.username, "Registered new user");

        Ok(user.into())
    }

    /// Verify credentials and issue a new session token
    ///
    /// The raw token is returned once; only its digest is persisted.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        let user = self
            .user_repo
            .find_by_username(request.username.trim())
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

        if !verify_password(&request.password, &user.password_hash)? {
            warn!(username = %user.username, "Failed login attempt");
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        // Opportunistic cleanup of stale sessions
        let removed = self.user_repo.delete_expired_sessions().await?;
        if removed > 0 {
            info!(removed, "Pruned expired sessions");
        }

        let token = new_session_token();
        let session = Session::new(token_digest(&token), user.id, self.session_ttl_hours);
        self.user_repo.create_session(&session).await?;

        info!(username = %user.username, "User logged in");

        Ok(LoginResponse {
            token,
            expires_at: session.expires_at,
        })
    }

    /// Profile of the authenticated user
    pub async fn me(&self, user_id: &str) -> Result<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User with id '{}' not found", user_id)))?;

        Ok(user.into())
    }
}

/// Generate an opaque 64-hex-character session token.
fn new_session_token() -> String {
    format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}
