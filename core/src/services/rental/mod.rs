//! Rental booking service and conflict policy.

pub mod conflict;
pub mod service;

pub use conflict::has_conflict;
pub use service::RentalService;

#[cfg(test)]
mod tests;
