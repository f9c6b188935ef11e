//! HTTP layer of the Locadora backend.
//!
//! Exposes the REST API over the core services: account registration
//! and authentication, fleet and customer management, and rental
//! booking with conflict detection.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
