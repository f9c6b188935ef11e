//! Customer management service.

pub mod service;

pub use service::CustomerService;
