//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::dto::ErrorResponse;
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{auth, cars, customers, rentals};

use locadora_core::repositories::{
    CarRepository, CustomerRepository, RentalRepository, UserRepository,
};
use locadora_core::services::{
    AuthService, CarService, CustomerService, RentalService, TokenService,
};

/// Application state that holds the shared services
pub struct AppState<R, C, K, U>
where
    R: RentalRepository,
    C: CarRepository,
    K: CustomerRepository,
    U: UserRepository,
{
    pub car_service: Arc<CarService<C>>,
    pub customer_service: Arc<CustomerService<K>>,
    pub rental_service: Arc<RentalService<R, C, K>>,
    pub auth_service: Arc<AuthService<U>>,
    pub token_service: Arc<TokenService>,
}

/// Create and configure the application with all dependencies
pub fn create_app<R, C, K, U>(
    app_state: web::Data<AppState<R, C, K, U>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: RentalRepository + 'static,
    C: CarRepository + 'static,
    K: CustomerRepository + 'static,
    U: UserRepository + 'static,
{
    let token_service = Arc::clone(&app_state.token_service);
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                // Account endpoints, open to unauthenticated callers
                .route("/register", web::post().to(auth::register::<R, C, K, U>))
                .route(
                    "/authenticate",
                    web::post().to(auth::authenticate::<R, C, K, U>),
                )
                // Fleet endpoints
                .service(
                    web::scope("/cars")
                        .wrap(JwtAuth::new(Arc::clone(&token_service)))
                        .route("", web::post().to(cars::create_car::<R, C, K, U>))
                        .route("", web::get().to(cars::list_cars::<R, C, K, U>))
                        .route("/{plate}", web::get().to(cars::get_car::<R, C, K, U>))
                        .route("/{plate}", web::put().to(cars::update_car::<R, C, K, U>))
                        .route("/{plate}", web::delete().to(cars::delete_car::<R, C, K, U>)),
                )
                // Customer endpoints
                .service(
                    web::scope("/customers")
                        .wrap(JwtAuth::new(Arc::clone(&token_service)))
                        .route("", web::post().to(customers::create_customer::<R, C, K, U>))
                        .route("", web::get().to(customers::list_customers::<R, C, K, U>))
                        .route(
                            "/{cpf}",
                            web::get().to(customers::get_customer::<R, C, K, U>),
                        )
                        .route(
                            "/{cpf}",
                            web::put().to(customers::update_customer::<R, C, K, U>),
                        )
                        .route(
                            "/{cpf}",
                            web::delete().to(customers::delete_customer::<R, C, K, U>),
                        ),
                )
                // Rental endpoints
                .service(
                    web::scope("/rentals")
                        .wrap(JwtAuth::new(Arc::clone(&token_service)))
                        .route("", web::post().to(rentals::create_rental::<R, C, K, U>))
                        .route("", web::get().to(rentals::list_rentals::<R, C, K, U>))
                        .route("/{id}", web::get().to(rentals::get_rental::<R, C, K, U>))
                        .route(
                            "/{id}/finish",
                            web::post().to(rentals::finish_rental::<R, C, K, U>),
                        )
                        .route(
                            "/{id}/cancel",
                            web::post().to(rentals::cancel_rental::<R, C, K, U>),
                        )
                        .route(
                            "/{id}",
                            web::delete().to(rentals::delete_rental::<R, C, K, U>),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "locadora-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
