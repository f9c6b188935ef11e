//! Fleet management service.

pub mod service;

pub use service::CarService;
