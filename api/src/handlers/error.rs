//! Mapping from domain errors to HTTP responses.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use crate::dto::ErrorResponse;
use locadora_core::errors::{AuthError, DomainError, RentalError, TokenError, ValidationError};

/// Convert a domain error into the HTTP response the API contract requires.
///
/// Validation failures map to 400, missing resources to 404, booking and
/// uniqueness conflicts to 409, credential and token failures to 401, and
/// everything else to 500.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::ValidationErr(validation_error) => {
            handle_validation_error(validation_error)
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(
            ErrorResponse::new("not_found", format!("{} not found", resource)),
        ),
        DomainError::Conflict { message } => {
            HttpResponse::Conflict().json(ErrorResponse::new("conflict", message))
        }
        DomainError::Rental(rental_error) => match rental_error {
            RentalError::CarUnavailable { .. } => HttpResponse::Conflict().json(
                ErrorResponse::new("car_unavailable", rental_error.to_string()),
            ),
            RentalError::InvalidStatusTransition { .. } => HttpResponse::Conflict().json(
                ErrorResponse::new("invalid_status_transition", rental_error.to_string()),
            ),
        },
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::EmailAlreadyRegistered => HttpResponse::Conflict().json(
                ErrorResponse::new("email_already_registered", auth_error.to_string()),
            ),
            AuthError::InvalidCredentials | AuthError::UserNotFound => {
                HttpResponse::Unauthorized().json(ErrorResponse::new(
                    "invalid_credentials",
                    "Invalid email or password",
                ))
            }
        },
        DomainError::Token(token_error) => {
            handle_token_error(token_error)
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

fn handle_validation_error(error: ValidationError) -> HttpResponse {
    let code = match error {
        ValidationError::RequiredField { .. } => "required_field",
        ValidationError::InvalidLicensePlate { .. } => "invalid_license_plate",
        ValidationError::InvalidCpf { .. } => "invalid_cpf",
        ValidationError::InvalidPeriod { .. } => "invalid_period",
        ValidationError::NonPositivePrice { .. } => "non_positive_price",
        ValidationError::InvalidEmail => "invalid_email",
    };
    HttpResponse::BadRequest().json(ErrorResponse::new(code, error.to_string()))
}

fn handle_token_error(error: TokenError) -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new("invalid_token", error.to_string()))
}

/// Convert `validator` derive failures on a request body into a 400 response.
pub fn handle_request_validation(errors: ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join("; ");
    HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
}
