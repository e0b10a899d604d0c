mod auth_service;
mod helpers;
pub mod telemetry;

pub use auth_service::AuthService;
pub use helpers::{configure_postgresql, get_postgres_pool};
