//! Mock implementation of CarRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Car;
use crate::domain::value_objects::LicensePlate;
use crate::errors::DomainError;

use super::trait_::CarRepository;

/// In-memory car repository for testing
pub struct MockCarRepository {
    cars: Arc<RwLock<HashMap<LicensePlate, Car>>>,
}

impl MockCarRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            cars: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockCarRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CarRepository for MockCarRepository {
    async fn create(&self, car: Car) -> Result<Car, DomainError> {
        let mut cars = self.cars.write().await;

        if cars.contains_key(&car.license_plate) {
            return Err(DomainError::Conflict {
                message: format!("Car {} already registered", car.license_plate),
            });
        }

        cars.insert(car.license_plate.clone(), car.clone());
        Ok(car)
    }

    async fn find_by_plate(&self, plate: &LicensePlate) -> Result<Option<Car>, DomainError> {
        let cars = self.cars.read().await;
        Ok(cars.get(plate).cloned())
    }

    async fn list(&self) -> Result<Vec<Car>, DomainError> {
        let cars = self.cars.read().await;
        let mut all: Vec<Car> = cars.values().cloned().collect();
        all.sort_by(|a, b| a.license_plate.value().cmp(b.license_plate.value()));
        Ok(all)
    }

    async fn update(&self, car: Car) -> Result<Car, DomainError> {
        let mut cars = self.cars.write().await;

        if !cars.contains_key(&car.license_plate) {
            return Err(DomainError::NotFound {
                resource: "Car".to_string(),
            });
        }

        cars.insert(car.license_plate.clone(), car.clone());
        Ok(car)
    }

    async fn delete(&self, plate: &LicensePlate) -> Result<bool, DomainError> {
        let mut cars = self.cars.write().await;
        Ok(cars.remove(plate).is_some())
    }
}
