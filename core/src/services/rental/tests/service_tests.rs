//! Unit tests for RentalService using in-memory repositories.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::entities::{Car, Customer, RentalStatus};
use crate::domain::value_objects::{Cpf, LicensePlate};
use crate::errors::{DomainError, RentalError};
use crate::repositories::{
    CarRepository, CustomerRepository, MockCarRepository, MockCustomerRepository,
    MockRentalRepository,
};
use crate::services::rental::RentalService;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn service_with_fixtures(
) -> RentalService<MockRentalRepository, MockCarRepository, MockCustomerRepository> {
    let rental_repo = Arc::new(MockRentalRepository::new());
    let car_repo = Arc::new(MockCarRepository::new());
    let customer_repo = Arc::new(MockCustomerRepository::new());

    car_repo
        .create(Car::new(LicensePlate::of("ABC1234").unwrap(), "Toyota", "Corolla", 200.0).unwrap())
        .await
        .unwrap();
    customer_repo
        .create(Customer::new("Aislan", Cpf::of("51430203609").unwrap()).unwrap())
        .await
        .unwrap();

    RentalService::new(rental_repo, car_repo, customer_repo)
}

#[tokio::test]
async fn test_create_rental_persists_with_computed_price() {
    let service = service_with_fixtures().await;

    let rental = service
        .create_rental("ABC1234", "51430203609", date(2025, 1, 1), date(2025, 1, 2), true)
        .await
        .unwrap();

    assert_eq!(rental.status, RentalStatus::Active);
    // Two occupied days at 200.0 per day
    assert_eq!(rental.total_price, 400.0);
    assert_eq!(service.list_rentals().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_same_day_rental_charges_one_day() {
    let service = service_with_fixtures().await;

    let rental = service
        .create_rental("ABC1234", "51430203609", date(2025, 1, 1), date(2025, 1, 1), true)
        .await
        .unwrap();

    assert_eq!(rental.total_price, 200.0);
}

#[tokio::test]
async fn test_overlapping_booking_is_rejected() {
    let service = service_with_fixtures().await;

    service
        .create_rental("ABC1234", "51430203609", date(2024, 1, 10), date(2024, 1, 20), true)
        .await
        .unwrap();

    let result = service
        .create_rental("ABC1234", "51430203609", date(2024, 1, 12), date(2024, 1, 18), true)
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Rental(RentalError::CarUnavailable { .. }))
    ));
}

#[tokio::test]
async fn test_booking_touching_checkout_day_is_rejected() {
    let service = service_with_fixtures().await;

    service
        .create_rental("ABC1234", "51430203609", date(2024, 1, 10), date(2024, 1, 20), true)
        .await
        .unwrap();

    let result = service
        .create_rental("ABC1234", "51430203609", date(2024, 1, 20), date(2024, 1, 25), true)
        .await;
    assert!(result.is_err());

    // The day after checkout is free again
    let result = service
        .create_rental("ABC1234", "51430203609", date(2024, 1, 21), date(2024, 1, 25), true)
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_historical_rental_does_not_block_booking() {
    let service = service_with_fixtures().await;

    // Recorded as already finished
    service
        .create_rental("ABC1234", "51430203609", date(2024, 1, 10), date(2024, 1, 20), false)
        .await
        .unwrap();

    let rental = service
        .create_rental("ABC1234", "51430203609", date(2024, 1, 12), date(2024, 1, 18), true)
        .await
        .unwrap();
    assert_eq!(rental.status, RentalStatus::Active);
}

#[tokio::test]
async fn test_unknown_car_is_not_found() {
    let service = service_with_fixtures().await;

    let result = service
        .create_rental("ZZZ9999", "51430203609", date(2025, 1, 1), date(2025, 1, 2), true)
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { resource }) if resource == "Car"));
}

#[tokio::test]
async fn test_unknown_customer_is_not_found() {
    let service = service_with_fixtures().await;

    let result = service
        .create_rental("ABC1234", "12345678909", date(2025, 1, 1), date(2025, 1, 2), true)
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { resource }) if resource == "Customer"));
}

#[tokio::test]
async fn test_inverted_period_is_a_validation_error() {
    let service = service_with_fixtures().await;

    let result = service
        .create_rental("ABC1234", "51430203609", date(2025, 1, 10), date(2025, 1, 1), true)
        .await;

    assert!(matches!(result, Err(DomainError::ValidationErr(_))));
}

#[tokio::test]
async fn test_finish_rental_frees_the_car() {
    let service = service_with_fixtures().await;

    let rental = service
        .create_rental("ABC1234", "51430203609", date(2024, 1, 10), date(2024, 1, 20), true)
        .await
        .unwrap();

    let finished = service.finish_rental(rental.id).await.unwrap();
    assert_eq!(finished.status, RentalStatus::Finished);

    // Same period can now be booked again
    let rebooked = service
        .create_rental("ABC1234", "51430203609", date(2024, 1, 12), date(2024, 1, 18), true)
        .await;
    assert!(rebooked.is_ok());
}

#[tokio::test]
async fn test_cancel_twice_is_rejected() {
    let service = service_with_fixtures().await;

    let rental = service
        .create_rental("ABC1234", "51430203609", date(2024, 1, 10), date(2024, 1, 20), true)
        .await
        .unwrap();

    service.cancel_rental(rental.id).await.unwrap();
    let result = service.cancel_rental(rental.id).await;
    assert!(matches!(
        result,
        Err(DomainError::Rental(RentalError::InvalidStatusTransition { .. }))
    ));
}

#[tokio::test]
async fn test_remove_rental() {
    let service = service_with_fixtures().await;

    let rental = service
        .create_rental("ABC1234", "51430203609", date(2025, 1, 1), date(2025, 1, 2), true)
        .await
        .unwrap();

    service.remove_rental(rental.id).await.unwrap();
    assert!(service.get_rental(rental.id).await.is_err());
    assert!(service.remove_rental(rental.id).await.is_err());
}
