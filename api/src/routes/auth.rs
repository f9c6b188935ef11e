//! Account registration and authentication endpoints.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{AuthenticateRequest, AuthenticateResponse, RegisterRequest, RegisterResponse};
use crate::handlers::error::{handle_domain_error, handle_request_validation};

use locadora_core::repositories::{
    CarRepository, CustomerRepository, RentalRepository, UserRepository,
};

/// Handler for POST /api/v1/register
///
/// Creates a new operator account. Responds 201 with the created
/// account, 400 on invalid input and 409 when the email is taken.
pub async fn register<R, C, K, U>(
    state: web::Data<AppState<R, C, K, U>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    R: RentalRepository + 'static,
    C: CarRepository + 'static,
    K: CustomerRepository + 'static,
    U: UserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_request_validation(errors);
    }

    match state
        .auth_service
        .register(&request.name, &request.lastname, &request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(RegisterResponse::from(user)),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for POST /api/v1/authenticate
///
/// Verifies the credentials and responds 200 with a signed access
/// token, or 401 when the email or password is wrong.
pub async fn authenticate<R, C, K, U>(
    state: web::Data<AppState<R, C, K, U>>,
    request: web::Json<AuthenticateRequest>,
) -> HttpResponse
where
    R: RentalRepository + 'static,
    C: CarRepository + 'static,
    K: CustomerRepository + 'static,
    U: UserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_request_validation(errors);
    }

    match state
        .auth_service
        .authenticate(&request.email, &request.password)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(AuthenticateResponse { token }),
        Err(e) => handle_domain_error(e),
    }
}
