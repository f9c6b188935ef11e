//! Tests for the authentication service.
