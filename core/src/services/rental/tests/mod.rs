//! Tests for the rental service.

mod service_tests;
