//! Rental entity tying a car, a customer, and an occupied period together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{Cpf, LicensePlate, RentalPeriod};
use crate::errors::RentalError;

/// Lifecycle status of a rental
///
/// Only `Active` rentals occupy the car; finished and cancelled rentals
/// are kept for history and never block new bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RentalStatus {
    Active,
    Finished,
    Cancelled,
}

impl RentalStatus {
    /// Stable string form used for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Active => "ACTIVE",
            RentalStatus::Finished => "FINISHED",
            RentalStatus::Cancelled => "CANCELLED",
        }
    }
}

/// A rental agreement between the agency and a customer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rental {
    /// Unique identifier for the rental
    pub id: Uuid,

    /// Plate of the rented car
    pub license_plate: LicensePlate,

    /// CPF of the renting customer
    pub cpf: Cpf,

    /// Occupied date range, boundaries inclusive
    pub period: RentalPeriod,

    /// Total price fixed at creation: occupied days times the car's daily rate
    pub total_price: f64,

    /// Current lifecycle status
    pub status: RentalStatus,

    /// Timestamp when the rental was registered
    pub created_at: DateTime<Utc>,
}

impl Rental {
    /// Creates a new Rental instance
    pub fn new(
        license_plate: LicensePlate,
        cpf: Cpf,
        period: RentalPeriod,
        total_price: f64,
        status: RentalStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            license_plate,
            cpf,
            period,
            total_price,
            status,
            created_at: Utc::now(),
        }
    }

    /// Whether this rental currently occupies the car
    pub fn is_active(&self) -> bool {
        self.status == RentalStatus::Active
    }

    /// Marks the rental as finished; only active rentals can finish
    pub fn finish(&mut self) -> Result<(), RentalError> {
        self.transition(RentalStatus::Finished)
    }

    /// Cancels the rental; only active rentals can be cancelled
    pub fn cancel(&mut self) -> Result<(), RentalError> {
        self.transition(RentalStatus::Cancelled)
    }

    fn transition(&mut self, next: RentalStatus) -> Result<(), RentalError> {
        if self.status != RentalStatus::Active {
            return Err(RentalError::InvalidStatusTransition {
                status: self.status.as_str().to_string(),
            });
        }
        self.status = next;
        Ok(())
    }
}
