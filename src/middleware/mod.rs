pub mod auth;
pub mod logger;

pub use auth::{Claims, TokenVerifier, auth_middleware};
