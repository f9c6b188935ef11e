use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;

use locadora_api::app::{create_app, AppState};
use locadora_core::services::{
    AuthService, CarService, CustomerService, RentalService, TokenService,
};
use locadora_infra::{
    create_pool, MySqlCarRepository, MySqlCustomerRepository, MySqlRentalRepository,
    MySqlUserRepository,
};
use locadora_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Locadora API Server");

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    // Database and repositories
    let pool = create_pool(&config.database)
        .await
        .map_err(std::io::Error::other)?;
    let car_repository = Arc::new(MySqlCarRepository::new(pool.clone()));
    let customer_repository = Arc::new(MySqlCustomerRepository::new(pool.clone()));
    let rental_repository = Arc::new(MySqlRentalRepository::new(pool.clone()));
    let user_repository = Arc::new(MySqlUserRepository::new(pool));

    // Services
    let token_service = Arc::new(TokenService::from_config(&config.auth));
    let app_state = web::Data::new(AppState {
        car_service: Arc::new(CarService::new(Arc::clone(&car_repository))),
        customer_service: Arc::new(CustomerService::new(Arc::clone(&customer_repository))),
        rental_service: Arc::new(RentalService::new(
            rental_repository,
            car_repository,
            customer_repository,
        )),
        auth_service: Arc::new(AuthService::new(
            user_repository,
            Arc::clone(&token_service),
            config.auth.bcrypt_cost,
        )),
        token_service,
    });

    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
