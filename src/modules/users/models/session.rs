use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A login session
///
/// Only the SHA-256 digest of the opaque bearer token is stored; the raw
/// token exists solely in the login response.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Session {
    pub token_digest: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token_digest: String, user_id: String, ttl_hours: u32) -> Self {
        let now = Utc::now();
        Self {
            token_digest,
            user_id,
            created_at: now,
            expires_at: now + Duration::hours(i64::from(ttl_hours)),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
