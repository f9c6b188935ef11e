//! Rental repository trait defining the interface for rental persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Rental;
use crate::domain::value_objects::{LicensePlate, RentalPeriod};
use crate::errors::DomainError;

/// Repository trait for Rental entity persistence operations
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Persist a new rental
    ///
    /// Implementations backed by shared storage must re-check the active
    /// overlap constraint at commit time: two concurrent bookings for the
    /// same car can both pass the domain-level conflict check before either
    /// is written, and exactly one of them may win.
    async fn create(&self, rental: Rental) -> Result<Rental, DomainError>;

    /// Find a rental by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, DomainError>;

    /// List every rental
    async fn list(&self) -> Result<Vec<Rental>, DomainError>;

    /// All rentals of a given car, regardless of status
    ///
    /// This is the snapshot the booking conflict check evaluates.
    async fn find_by_plate(&self, plate: &LicensePlate) -> Result<Vec<Rental>, DomainError>;

    /// Update an existing rental
    ///
    /// Returns `DomainError::NotFound` when the id is unknown.
    async fn update(&self, rental: Rental) -> Result<Rental, DomainError>;

    /// Delete a rental by id
    ///
    /// Returns `Ok(true)` if a rental was deleted, `Ok(false)` if none matched.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Storage-side mirror of the booking conflict policy
    ///
    /// True when an ACTIVE rental of the given car shares at least one
    /// calendar day with `period` (boundaries inclusive).
    async fn exists_active_overlap(
        &self,
        plate: &LicensePlate,
        period: &RentalPeriod,
    ) -> Result<bool, DomainError>;
}
