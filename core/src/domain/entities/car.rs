//! Car entity representing a vehicle of the rental fleet.

use serde::Serialize;

use crate::domain::value_objects::LicensePlate;
use crate::errors::ValidationError;

/// A car registered for rental, identified by its license plate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    /// Unique license plate identifying the car
    pub license_plate: LicensePlate,

    /// Manufacturer, e.g. "Toyota"
    pub brand: String,

    /// Model name, e.g. "Corolla"
    pub model: String,

    /// Daily rental rate, strictly positive
    pub base_price: f64,
}

impl Car {
    /// Creates a new Car after validating its fields
    pub fn new(
        license_plate: LicensePlate,
        brand: impl Into<String>,
        model: impl Into<String>,
        base_price: f64,
    ) -> Result<Self, ValidationError> {
        let brand = brand.into();
        let model = model.into();

        if brand.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "brand".to_string(),
            });
        }
        if model.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "model".to_string(),
            });
        }
        if !base_price.is_finite() || base_price <= 0.0 {
            return Err(ValidationError::NonPositivePrice { price: base_price });
        }

        Ok(Self {
            license_plate,
            brand,
            model,
            base_price,
        })
    }
}
