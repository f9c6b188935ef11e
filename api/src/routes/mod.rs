//! Route handlers grouped by resource.

pub mod auth;
pub mod cars;
pub mod customers;
pub mod rentals;
