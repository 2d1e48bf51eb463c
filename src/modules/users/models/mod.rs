pub mod session;
pub mod user;

pub use session::Session;
pub use user::{
    validate_password, LoginRequest, LoginResponse, RegisterRequest, User, UserResponse,
};
