//! HTTP middleware for authentication and cross-origin requests.

pub mod auth;
pub mod cors;

pub use auth::{AuthContext, JwtAuth};
pub use cors::create_cors;
