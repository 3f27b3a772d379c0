//! Auth module - demo login with a persisted session.

mod auth_model;
mod auth_service;


pub use auth_model::{demo_user, User, DEMO_PASSWORD, DEMO_USERNAME};
pub use auth_service::AuthService;
