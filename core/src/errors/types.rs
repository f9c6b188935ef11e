//! Error type definitions for authentication, validation, and rental operations.

use chrono::NaiveDate;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid license plate: {plate}")]
    InvalidLicensePlate { plate: String },

    #[error("Invalid CPF: {cpf}")]
    InvalidCpf { cpf: String },

    #[error("Invalid rental period: {start_date} to {end_date}")]
    InvalidPeriod {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },

    #[error("Price must be positive, got {price}")]
    NonPositivePrice { price: f64 },

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Rental business-rule errors
#[derive(Error, Debug)]
pub enum RentalError {
    #[error("Car {plate} is unavailable for the requested period")]
    CarUnavailable { plate: String },

    #[error("Rental is already {status}")]
    InvalidStatusTransition { status: String },
}
