//! Rental booking endpoints. All require authentication.
//!
//! Booking a car runs the overlap check against the car's existing
//! active rentals; a rejected booking responds 409.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::rental::{CreateRentalRequest, RentalResponse};
use crate::handlers::error::{handle_domain_error, handle_request_validation};
use crate::middleware::AuthContext;

use locadora_core::repositories::{
    CarRepository, CustomerRepository, RentalRepository, UserRepository,
};

/// Handler for POST /api/v1/rentals
pub async fn create_rental<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
    request: web::Json<CreateRentalRequest>,
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
        .rental_service
        .create_rental(
            &request.license_plate,
            &request.cpf,
            request.start_date,
            request.end_date,
            request.active,
        )
        .await
    {
        Ok(rental) => HttpResponse::Created().json(RentalResponse::from(rental)),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/rentals
pub async fn list_rentals<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
) -> HttpResponse
where
    R: RentalRepository + 'static,
    C: CarRepository + 'static,
    K: CustomerRepository + 'static,
    U: UserRepository + 'static,
{
    match state.rental_service.list_rentals().await {
        Ok(rentals) => HttpResponse::Ok().json(
            rentals
                .into_iter()
                .map(RentalResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/rentals/{id}
pub async fn get_rental<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    R: RentalRepository + 'static,
    C: CarRepository + 'static,
    K: CustomerRepository + 'static,
    U: UserRepository + 'static,
{
    match state.rental_service.get_rental(path.into_inner()).await {
        Ok(rental) => HttpResponse::Ok().json(RentalResponse::from(rental)),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for POST /api/v1/rentals/{id}/finish
///
/// Marks the rental finished, freeing the car for new bookings.
pub async fn finish_rental<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    R: RentalRepository + 'static,
    C: CarRepository + 'static,
    K: CustomerRepository + 'static,
    U: UserRepository + 'static,
{
    match state.rental_service.finish_rental(path.into_inner()).await {
        Ok(rental) => HttpResponse::Ok().json(RentalResponse::from(rental)),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for POST /api/v1/rentals/{id}/cancel
pub async fn cancel_rental<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    R: RentalRepository + 'static,
    C: CarRepository + 'static,
    K: CustomerRepository + 'static,
    U: UserRepository + 'static,
{
    match state.rental_service.cancel_rental(path.into_inner()).await {
        Ok(rental) => HttpResponse::Ok().json(RentalResponse::from(rental)),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for DELETE /api/v1/rentals/{id}
pub async fn delete_rental<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    R: RentalRepository + 'static,
    C: CarRepository + 'static,
    K: CustomerRepository + 'static,
    U: UserRepository + 'static,
{
    match state.rental_service.remove_rental(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => handle_domain_error(e),
    }
}
