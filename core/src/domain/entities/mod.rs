//! Business entities of the vehicle-rental domain.

pub mod car;
pub mod customer;
pub mod rental;
pub mod token;
pub mod user;

// Re-export commonly used entity types
pub use car::Car;
pub use customer::Customer;
pub use rental::{Rental, RentalStatus};
pub use token::Claims;
pub use user::{Role, User};
