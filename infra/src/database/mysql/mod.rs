//! MySQL implementations of the core repository traits.

pub mod car_repository_impl;
pub mod customer_repository_impl;
pub mod rental_repository_impl;
pub mod user_repository_impl;

pub use car_repository_impl::MySqlCarRepository;
pub use customer_repository_impl::MySqlCustomerRepository;
pub use rental_repository_impl::MySqlRentalRepository;
pub use user_repository_impl::MySqlUserRepository;
