//! Fleet management payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use locadora_core::domain::entities::Car;

/// Request body for POST /api/v1/cars
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    #[validate(length(min = 1, message = "licensePlate must not be empty"))]
    pub license_plate: String,

    #[validate(length(min = 1, message = "brand must not be empty"))]
    pub brand: String,

    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,

    pub base_price: f64,
}

/// Request body for PUT /api/v1/cars/{plate}
///
/// The plate itself is taken from the path and cannot be changed.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, message = "brand must not be empty"))]
    pub brand: String,

    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,

    pub base_price: f64,
}

/// Car representation returned by the API
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub base_price: f64,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            license_plate: car.license_plate.value().to_string(),
            brand: car.brand,
            model: car.model,
            base_price: car.base_price,
        }
    }
}
