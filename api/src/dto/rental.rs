//! Rental booking payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use locadora_core::domain::entities::{Rental, RentalStatus};

/// Request body for POST /api/v1/rentals
///
/// Dates are inclusive ISO-8601 calendar days. When `active` is false
/// the rental is recorded as already finished and never blocks other
/// bookings.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    #[validate(length(min = 1, message = "licensePlate must not be empty"))]
    pub license_plate: String,

    #[validate(length(min = 1, message = "cpf must not be empty"))]
    pub cpf: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Rental representation returned by the API
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub id: Uuid,
    pub license_plate: String,
    pub cpf: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub status: RentalStatus,
}

impl From<Rental> for RentalResponse {
    fn from(rental: Rental) -> Self {
        Self {
            id: rental.id,
            license_plate: rental.license_plate.value().to_string(),
            cpf: rental.cpf.formatted(),
            start_date: rental.period.start_date(),
            end_date: rental.period.end_date(),
            total_price: rental.total_price,
            status: rental.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locadora_core::domain::value_objects::{Cpf, LicensePlate, RentalPeriod};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_active_defaults_to_true() {
        let request: CreateRentalRequest = serde_json::from_value(serde_json::json!({
            "licensePlate": "ABC1234",
            "cpf": "51430203609",
            "startDate": "2026-01-10",
            "endDate": "2026-01-12"
        }))
        .unwrap();
        assert!(request.active);
    }

    #[test]
    fn test_rental_response_shape() {
        let rental = Rental::new(
            LicensePlate::of("ABC1234").unwrap(),
            Cpf::of("51430203609").unwrap(),
            RentalPeriod::new(date(2026, 1, 10), date(2026, 1, 12)).unwrap(),
            600.0,
            RentalStatus::Active,
        );
        let json = serde_json::to_value(RentalResponse::from(rental)).unwrap();
        assert_eq!(json["licensePlate"], "ABC1234");
        assert_eq!(json["cpf"], "514.302.036-09");
        assert_eq!(json["startDate"], "2026-01-10");
        assert_eq!(json["endDate"], "2026-01-12");
        assert_eq!(json["totalPrice"], 600.0);
        assert_eq!(json["status"], "ACTIVE");
    }
}
