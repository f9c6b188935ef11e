//! # Locadora Infrastructure
//!
//! MySQL-backed implementations of the core repository traits, plus
//! connection pool construction.

pub mod database;

pub use database::connection::create_pool;
pub use database::mysql::{
    MySqlCarRepository, MySqlCustomerRepository, MySqlRentalRepository, MySqlUserRepository,
};
