//! Customer management endpoints. All require authentication.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::customer::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::handlers::error::{handle_domain_error, handle_request_validation};
use crate::middleware::AuthContext;

use locadora_core::repositories::{
    CarRepository, CustomerRepository, RentalRepository, UserRepository,
};

/// Handler for POST /api/v1/customers
pub async fn create_customer<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
    request: web::Json<CreateCustomerRequest>,
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
        .customer_service
        .register_customer(&request.name, &request.cpf)
        .await
    {
        Ok(customer) => HttpResponse::Created().json(CustomerResponse::from(customer)),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/customers
pub async fn list_customers<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
) -> HttpResponse
where
    R: RentalRepository + 'static,
    C: CarRepository + 'static,
    K: CustomerRepository + 'static,
    U: UserRepository + 'static,
{
    match state.customer_service.list_customers().await {
        Ok(customers) => HttpResponse::Ok().json(
            customers
                .into_iter()
                .map(CustomerResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/customers/{cpf}
///
/// Accepts the CPF with or without formatting.
pub async fn get_customer<R, C, K, U>(
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
    match state.customer_service.get_customer(&path.into_inner()).await {
        Ok(customer) => HttpResponse::Ok().json(CustomerResponse::from(customer)),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for PUT /api/v1/customers/{cpf}
///
/// Only the name can change; the CPF identifies the customer.
pub async fn update_customer<R, C, K, U>(
    _auth: AuthContext,
    state: web::Data<AppState<R, C, K, U>>,
    path: web::Path<String>,
    request: web::Json<UpdateCustomerRequest>,
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
        .customer_service
        .rename_customer(&path.into_inner(), &request.name)
        .await
    {
        Ok(customer) => HttpResponse::Ok().json(CustomerResponse::from(customer)),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for DELETE /api/v1/customers/{cpf}
pub async fn delete_customer<R, C, K, U>(
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
    match state
        .customer_service
        .remove_customer(&path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => handle_domain_error(e),
    }
}
