//! Stateless JWT issue and verification.

pub mod service;

pub use service::TokenService;
