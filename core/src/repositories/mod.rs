//! Repository interfaces for domain persistence, with in-memory mocks for tests.

pub mod car;
pub mod customer;
pub mod rental;
pub mod user;

pub use car::{CarRepository, MockCarRepository};
pub use customer::{CustomerRepository, MockCustomerRepository};
pub use rental::{MockRentalRepository, RentalRepository};
pub use user::{MockUserRepository, UserRepository};
