//! Value objects representing immutable domain concepts.

pub mod cpf;
pub mod license_plate;
pub mod rental_period;

// Re-export commonly used types
pub use cpf::Cpf;
pub use license_plate::LicensePlate;
pub use rental_period::RentalPeriod;
