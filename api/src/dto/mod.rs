//! Request and response payloads for the REST API.
//!
//! All JSON payloads use camelCase field names.

pub mod auth;
pub mod car;
pub mod customer;
pub mod rental;

pub use locadora_shared::types::ErrorResponse;
