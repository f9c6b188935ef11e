//! Business services orchestrating entities and repositories.

pub mod auth;
pub mod car;
pub mod customer;
pub mod rental;
pub mod token;

// Re-export service types for convenience
pub use auth::AuthService;
pub use car::CarService;
pub use customer::CustomerService;
pub use rental::RentalService;
pub use token::TokenService;
