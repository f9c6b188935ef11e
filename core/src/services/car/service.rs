//! Car management service implementation.

use std::sync::Arc;

use crate::domain::entities::Car;
use crate::domain::value_objects::LicensePlate;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CarRepository;

/// Service for registering and managing the rental fleet
pub struct CarService<C>
where
    C: CarRepository,
{
    car_repository: Arc<C>,
}

impl<C> CarService<C>
where
    C: CarRepository,
{
    /// Create a new car service
    pub fn new(car_repository: Arc<C>) -> Self {
        Self { car_repository }
    }

    /// Register a new car in the fleet
    pub async fn register_car(
        &self,
        plate: &str,
        brand: &str,
        model: &str,
        base_price: f64,
    ) -> DomainResult<Car> {
        let plate = LicensePlate::of(plate)?;
        let car = Car::new(plate, brand, model, base_price)?;

        let created = self.car_repository.create(car).await?;
        tracing::info!(plate = %created.license_plate, "car registered");
        Ok(created)
    }

    /// Fetch a single car by plate
    pub async fn get_car(&self, plate: &str) -> DomainResult<Car> {
        let plate = LicensePlate::of(plate)?;
        self.car_repository
            .find_by_plate(&plate)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Car".to_string(),
            })
    }

    /// List every registered car
    pub async fn list_cars(&self) -> DomainResult<Vec<Car>> {
        self.car_repository.list().await
    }

    /// Update the mutable fields of a car; the plate never changes
    pub async fn update_car(
        &self,
        plate: &str,
        brand: &str,
        model: &str,
        base_price: f64,
    ) -> DomainResult<Car> {
        let existing = self.get_car(plate).await?;
        let updated = Car::new(existing.license_plate, brand, model, base_price)?;
        self.car_repository.update(updated).await
    }

    /// Remove a car from the fleet
    pub async fn remove_car(&self, plate: &str) -> DomainResult<()> {
        let plate = LicensePlate::of(plate)?;
        if !self.car_repository.delete(&plate).await? {
            return Err(DomainError::NotFound {
                resource: "Car".to_string(),
            });
        }
        Ok(())
    }
}
