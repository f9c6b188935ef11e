//! Car repository trait defining the interface for fleet persistence.

use async_trait::async_trait;

use crate::domain::entities::Car;
use crate::domain::value_objects::LicensePlate;
use crate::errors::DomainError;

/// Repository trait for Car entity persistence operations
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers. The
/// license plate is the natural key of a car.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Persist a new car
    ///
    /// Returns `DomainError::Conflict` when a car with the same license
    /// plate already exists.
    async fn create(&self, car: Car) -> Result<Car, DomainError>;

    /// Find a car by its license plate
    async fn find_by_plate(&self, plate: &LicensePlate) -> Result<Option<Car>, DomainError>;

    /// List every registered car
    async fn list(&self) -> Result<Vec<Car>, DomainError>;

    /// Update an existing car identified by its plate
    ///
    /// Returns `DomainError::NotFound` when no car carries that plate.
    async fn update(&self, car: Car) -> Result<Car, DomainError>;

    /// Delete a car by plate
    ///
    /// Returns `Ok(true)` if a car was deleted, `Ok(false)` if none matched.
    async fn delete(&self, plate: &LicensePlate) -> Result<bool, DomainError>;
}
