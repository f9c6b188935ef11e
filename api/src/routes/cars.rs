//! Fleet management endpoints. All require authentication.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::car::{CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::handlers::error::{handle_domain_error, handle_request_validation};
use crate::middleware::AuthContext;

use locadora_core::repositories::{
    CarRepository, CustomerRepository, RentalRepository, UserRepository,
};

/// Handler for POST /api/v1/cars
pub async fn create_car<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
    request: web::Json<CreateCarRequest>,
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
        .car_service
        .register_car(
            &request.license_plate,
            &request.brand,
            &request.model,
            request.base_price,
        )
        .await
    {
        Ok(car) => HttpResponse::Created().json(CarResponse::from(car)),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/cars
pub async fn list_cars<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
) -> HttpResponse
where
    R: RentalRepository + 'static,
    C: CarRepository + 'static,
    K: CustomerRepository + 'static,
    U: UserRepository + 'static,
{
    match state.car_service.list_cars().await {
        Ok(cars) => HttpResponse::Ok().json(
            cars.into_iter().map(CarResponse::from).collect::<Vec<_>>(),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/cars/{plate}
pub async fn get_car<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
    path: web::Path<String>,
) -> HttpResponse
where
    R: RentalRepository + 'static,
    C: CarRepository + 'static,
    K: CustomerRepository + 'static,
    U: UserRepository + 'static,
{
    match state.car_service.get_car(&path.into_inner()).await {
        Ok(car) => HttpResponse::Ok().json(CarResponse::from(car)),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for PUT /api/v1/cars/{plate}
///
/// The plate identifies the car and is immutable.
pub async fn update_car<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
    path: web::Path<String>,
    request: web::Json<UpdateCarRequest>,
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
        .car_service
        .update_car(
            &path.into_inner(),
            &request.brand,
            &request.model,
            request.base_price,
        )
        .await
    {
        Ok(car) => HttpResponse::Ok().json(CarResponse::from(car)),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for DELETE /api/v1/cars/{plate}
pub async fn delete_car<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
    path: web::Path<String>,
) -> HttpResponse
where
    R: RentalRepository + 'static,
    C: CarRepository + 'static,
    K: CustomerRepository + 'static,
    U: UserRepository + 'static,
{
    match state.car_service.remove_car(&path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => handle_domain_error(e),
    }
}
