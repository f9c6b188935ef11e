//! Mock implementation of RentalRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Rental;
use crate::domain::value_objects::{LicensePlate, RentalPeriod};
use crate::errors::DomainError;
use crate::services::rental::conflict;

use super::trait_::RentalRepository;

/// In-memory rental repository for testing
pub struct MockRentalRepository {
    rentals: Arc<RwLock<HashMap<Uuid, Rental>>>,
}

impl MockRentalRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            rentals: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockRentalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentalRepository for MockRentalRepository {
    async fn create(&self, rental: Rental) -> Result<Rental, DomainError> {
        let mut rentals = self.rentals.write().await;

        // Commit-time guard against racing bookings, same policy the
        // database adapter enforces in its insert transaction.
        let snapshot: Vec<Rental> = rentals.values().cloned().collect();
        if rental.is_active()
            && conflict::has_conflict(&rental.license_plate, &rental.period, &snapshot)
        {
            return Err(DomainError::Conflict {
                message: format!("Car {} already booked for this period", rental.license_plate),
            });
        }

        rentals.insert(rental.id, rental.clone());
        Ok(rental)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, DomainError> {
        let rentals = self.rentals.read().await;
        Ok(rentals.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().await;
        let mut all: Vec<Rental> = rentals.values().cloned().collect();
        all.sort_by_key(|r| r.created_at);
        Ok(all)
    }

    async fn find_by_plate(&self, plate: &LicensePlate) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().await;
        Ok(rentals
            .values()
            .filter(|r| r.license_plate == *plate)
            .cloned()
            .collect())
    }

    async fn update(&self, rental: Rental) -> Result<Rental, DomainError> {
        let mut rentals = self.rentals.write().await;

        if !rentals.contains_key(&rental.id) {
            return Err(DomainError::NotFound {
                resource: "Rental".to_string(),
            });
        }

        rentals.insert(rental.id, rental.clone());
        Ok(rental)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut rentals = self.rentals.write().await;
        Ok(rentals.remove(&id).is_some())
    }

    async fn exists_active_overlap(
        &self,
        plate: &LicensePlate,
        period: &RentalPeriod,
    ) -> Result<bool, DomainError> {
        let rentals = self.rentals.read().await;
        let snapshot: Vec<Rental> = rentals.values().cloned().collect();
        Ok(conflict::has_conflict(plate, period, &snapshot))
    }
}
