// Users module: registration, login, session tokens

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Session, User};
pub use repositories::UserRepository;
pub use services::UserService;
