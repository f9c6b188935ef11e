//! MySQL implementation of the CarRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use locadora_core::domain::entities::Car;
use locadora_core::domain::value_objects::LicensePlate;
use locadora_core::errors::DomainError;
use locadora_core::repositories::CarRepository;

/// MySQL implementation of CarRepository
///
/// The license plate is the primary key of the `cars` table, so the
/// duplicate-plate rule is enforced by the database itself.
pub struct MySqlCarRepository {
    pool: MySqlPool,
}

impl MySqlCarRepository {
    /// Create a new MySQL car repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Car entity
    fn row_to_car(row: &sqlx::mysql::MySqlRow) -> Result<Car, DomainError> {
        let plate: String = row.try_get("license_plate").map_err(|e| DomainError::Internal {
            message: format!("Failed to get license_plate: {}", e),
        })?;
        let brand: String = row.try_get("brand").map_err(|e| DomainError::Internal {
            message: format!("Failed to get brand: {}", e),
        })?;
        let model: String = row.try_get("model").map_err(|e| DomainError::Internal {
            message: format!("Failed to get model: {}", e),
        })?;
        let base_price: f64 = row.try_get("base_price").map_err(|e| DomainError::Internal {
            message: format!("Failed to get base_price: {}", e),
        })?;

        let plate = LicensePlate::of(&plate).map_err(|e| DomainError::Internal {
            message: format!("Stored plate is invalid: {}", e),
        })?;
        Car::new(plate, brand, model, base_price).map_err(|e| DomainError::Internal {
            message: format!("Stored car is invalid: {}", e),
        })
    }
}

#[async_trait]
impl CarRepository for MySqlCarRepository {
    async fn create(&self, car: Car) -> Result<Car, DomainError> {
        let query = r#"
            INSERT INTO cars (license_plate, brand, model, base_price)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(car.license_plate.value())
            .bind(&car.brand)
            .bind(&car.model)
            .bind(car.base_price)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(car),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DomainError::Conflict {
                    message: format!("Car {} already registered", car.license_plate),
                })
            }
            Err(e) => Err(DomainError::Internal {
                message: format!("Failed to create car: {}", e),
            }),
        }
    }

    async fn find_by_plate(&self, plate: &LicensePlate) -> Result<Option<Car>, DomainError> {
        let query = r#"
            SELECT license_plate, brand, model, base_price
            FROM cars
            WHERE license_plate = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(plate.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find car: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_car(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Car>, DomainError> {
        let query = r#"
            SELECT license_plate, brand, model, base_price
            FROM cars
            ORDER BY license_plate
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list cars: {}", e),
            })?;

        let mut cars = Vec::new();
        for row in rows {
            cars.push(Self::row_to_car(&row)?);
        }
        Ok(cars)
    }

    async fn update(&self, car: Car) -> Result<Car, DomainError> {
        let query = r#"
            UPDATE cars
            SET brand = ?, model = ?, base_price = ?
            WHERE license_plate = ?
        "#;

        let result = sqlx::query(query)
            .bind(&car.brand)
            .bind(&car.model)
            .bind(car.base_price)
            .bind(car.license_plate.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update car: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Car".to_string(),
            });
        }
        Ok(car)
    }

    async fn delete(&self, plate: &LicensePlate) -> Result<bool, DomainError> {
        let query = "DELETE FROM cars WHERE license_plate = ?";

        let result = sqlx::query(query)
            .bind(plate.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete car: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
