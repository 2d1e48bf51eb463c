pub mod auth;

pub use auth::{hash_password, token_digest, verify_password, AuthedUser, BearerAuth};
