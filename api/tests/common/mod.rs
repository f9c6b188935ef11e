//! Shared fixtures for the API integration tests.
//!
//! Every test runs the real application factory over the in-memory
//! mock repositories, so the full HTTP stack is exercised without a
//! database.

use std::sync::Arc;

use actix_web::web;

use locadora_api::app::AppState;
use locadora_core::domain::entities::User;
use locadora_core::repositories::{
    MockCarRepository, MockCustomerRepository, MockRentalRepository, MockUserRepository,
};
use locadora_core::services::{
    AuthService, CarService, CustomerService, RentalService, TokenService,
};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

// Low cost keeps the hashing fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

pub type TestState =
    AppState<MockRentalRepository, MockCarRepository, MockCustomerRepository, MockUserRepository>;

/// Builds an application state backed entirely by mock repositories.
pub fn test_state() -> web::Data<TestState> {
    let car_repository = Arc::new(MockCarRepository::new());
    let customer_repository = Arc::new(MockCustomerRepository::new());
    let rental_repository = Arc::new(MockRentalRepository::new());
    let user_repository = Arc::new(MockUserRepository::new());
    let token_service = Arc::new(TokenService::new(TEST_JWT_SECRET, 3600));

    web::Data::new(AppState {
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
            TEST_BCRYPT_COST,
        )),
        token_service,
    })
}

/// Issues a valid access token for an arbitrary operator account.
pub fn bearer_token(state: &TestState) -> String {
    let user = User::new("Test", "Operator", "operator@locadora.com", "hash");
    state
        .token_service
        .generate_token(&user)
        .expect("token generation should succeed")
}
