//! Rental booking service implementation.

use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Rental, RentalStatus};
use crate::domain::value_objects::{Cpf, LicensePlate, RentalPeriod};
use crate::errors::{DomainError, DomainResult, RentalError};
use crate::repositories::{CarRepository, CustomerRepository, RentalRepository};

use super::conflict;

/// Service for creating and managing rentals
///
/// Booking goes through the conflict policy in [`conflict`]: the service
/// fetches the car's rental snapshot, evaluates the pure predicate, and
/// only then persists. The repository re-checks the same rule at commit
/// time, so two racing conflicting bookings cannot both win.
pub struct RentalService<R, C, K>
where
    R: RentalRepository,
    C: CarRepository,
    K: CustomerRepository,
{
    rental_repository: Arc<R>,
    car_repository: Arc<C>,
    customer_repository: Arc<K>,
}

impl<R, C, K> RentalService<R, C, K>
where
    R: RentalRepository,
    C: CarRepository,
    K: CustomerRepository,
{
    /// Create a new rental service
    pub fn new(
        rental_repository: Arc<R>,
        car_repository: Arc<C>,
        customer_repository: Arc<K>,
    ) -> Self {
        Self {
            rental_repository,
            car_repository,
            customer_repository,
        }
    }

    /// Register a rental of a car to a customer over a date range
    ///
    /// When `active` is false the rental is recorded as already finished
    /// (a historical agreement); such rentals never block future bookings
    /// and are not conflict-checked themselves.
    ///
    /// The total price is the inclusive day count times the car's daily
    /// rate, fixed at creation.
    pub async fn create_rental(
        &self,
        plate: &str,
        cpf: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        active: bool,
    ) -> DomainResult<Rental> {
        let plate = LicensePlate::of(plate)?;
        let cpf = Cpf::of(cpf)?;
        let period = RentalPeriod::new(start_date, end_date)?;

        let car = self
            .car_repository
            .find_by_plate(&plate)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Car".to_string(),
            })?;

        self.customer_repository
            .find_by_cpf(&cpf)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Customer".to_string(),
            })?;

        if active {
            let existing = self.rental_repository.find_by_plate(&plate).await?;
            if conflict::has_conflict(&plate, &period, &existing) {
                tracing::info!(plate = %plate, "booking rejected, period overlaps an active rental");
                return Err(RentalError::CarUnavailable {
                    plate: plate.value().to_string(),
                }
                .into());
            }
        }

        let total_price = period.days() as f64 * car.base_price;
        let status = if active {
            RentalStatus::Active
        } else {
            RentalStatus::Finished
        };

        let rental = Rental::new(plate, cpf, period, total_price, status);
        let created = self.rental_repository.create(rental).await?;

        tracing::info!(rental_id = %created.id, plate = %created.license_plate, "rental registered");
        Ok(created)
    }

    /// Fetch a single rental by id
    pub async fn get_rental(&self, id: Uuid) -> DomainResult<Rental> {
        self.rental_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Rental".to_string(),
            })
    }

    /// List every rental
    pub async fn list_rentals(&self) -> DomainResult<Vec<Rental>> {
        self.rental_repository.list().await
    }

    /// Mark an active rental as finished (car returned)
    pub async fn finish_rental(&self, id: Uuid) -> DomainResult<Rental> {
        let mut rental = self.get_rental(id).await?;
        rental.finish()?;
        self.rental_repository.update(rental).await
    }

    /// Cancel an active rental
    pub async fn cancel_rental(&self, id: Uuid) -> DomainResult<Rental> {
        let mut rental = self.get_rental(id).await?;
        rental.cancel()?;
        self.rental_repository.update(rental).await
    }

    /// Delete a rental record
    pub async fn remove_rental(&self, id: Uuid) -> DomainResult<()> {
        if !self.rental_repository.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: "Rental".to_string(),
            });
        }
        Ok(())
    }
}
