//! MySQL implementation of the RentalRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use locadora_core::domain::entities::{Rental, RentalStatus};
use locadora_core::domain::value_objects::{Cpf, LicensePlate, RentalPeriod};
use locadora_core::errors::DomainError;
use locadora_core::repositories::RentalRepository;

/// MySQL implementation of RentalRepository
///
/// The active-overlap rule is mirrored here as an indexed range query and
/// re-checked inside the insert transaction, closing the window between a
/// domain-level conflict check and the write.
pub struct MySqlRentalRepository {
    pool: MySqlPool,
}

const OVERLAP_EXISTS_SQL: &str = r#"
    SELECT EXISTS(
        SELECT 1 FROM rentals
        WHERE license_plate = ?
            AND status = 'ACTIVE'
            AND start_date <= ?
            AND ? <= end_date
    ) AS overlaps
"#;

// MySQL error numbers for lock contention
const ER_LOCK_WAIT_TIMEOUT: u16 = 1205;
const ER_LOCK_DEADLOCK: u16 = 1213;

/// True when the error number signals the insert lost a lock race.
///
/// Two bookings for the same car can both pass the empty locking
/// re-check; their gap locks are compatible and the inserts then
/// deadlock. InnoDB rolls one back, which is a late-discovered
/// conflict, not a server fault.
fn is_lock_contention(number: u16) -> bool {
    number == ER_LOCK_DEADLOCK || number == ER_LOCK_WAIT_TIMEOUT
}

impl MySqlRentalRepository {
    /// Create a new MySQL rental repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Rental entity
    fn row_to_rental(row: &sqlx::mysql::MySqlRow) -> Result<Rental, DomainError> {
        let internal = |message: String| DomainError::Internal { message };

        let id: String = row
            .try_get("id")
            .map_err(|e| internal(format!("Failed to get id: {}", e)))?;
        let plate: String = row
            .try_get("license_plate")
            .map_err(|e| internal(format!("Failed to get license_plate: {}", e)))?;
        let cpf: String = row
            .try_get("cpf")
            .map_err(|e| internal(format!("Failed to get cpf: {}", e)))?;
        let start_date: NaiveDate = row
            .try_get("start_date")
            .map_err(|e| internal(format!("Failed to get start_date: {}", e)))?;
        let end_date: NaiveDate = row
            .try_get("end_date")
            .map_err(|e| internal(format!("Failed to get end_date: {}", e)))?;
        let total_price: f64 = row
            .try_get("total_price")
            .map_err(|e| internal(format!("Failed to get total_price: {}", e)))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| internal(format!("Failed to get status: {}", e)))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| internal(format!("Failed to get created_at: {}", e)))?;

        let status = match status.as_str() {
            "ACTIVE" => RentalStatus::Active,
            "FINISHED" => RentalStatus::Finished,
            "CANCELLED" => RentalStatus::Cancelled,
            other => return Err(internal(format!("Unknown rental status: {}", other))),
        };

        Ok(Rental {
            id: Uuid::parse_str(&id)
                .map_err(|e| internal(format!("Invalid rental UUID: {}", e)))?,
            license_plate: LicensePlate::of(&plate)
                .map_err(|e| internal(format!("Stored plate is invalid: {}", e)))?,
            cpf: Cpf::of(&cpf).map_err(|e| internal(format!("Stored CPF is invalid: {}", e)))?,
            period: RentalPeriod::new(start_date, end_date)
                .map_err(|e| internal(format!("Stored period is invalid: {}", e)))?,
            total_price,
            status,
            created_at,
        })
    }
}

#[async_trait]
impl RentalRepository for MySqlRentalRepository {
    async fn create(&self, rental: Rental) -> Result<Rental, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to start transaction: {}", e),
        })?;

        // Commit-time re-check of the overlap rule. The locking read keeps
        // a racing insert for the same car serialized behind this one.
        if rental.is_active() {
            let query = r#"
                SELECT EXISTS(
                    SELECT 1 FROM rentals
                    WHERE license_plate = ?
                        AND status = 'ACTIVE'
                        AND start_date <= ?
                        AND ? <= end_date
                    FOR UPDATE
                ) AS overlaps
            "#;

            let row = sqlx::query(query)
                .bind(rental.license_plate.value())
                .bind(rental.period.end_date())
                .bind(rental.period.start_date())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to check overlap: {}", e),
                })?;

            let overlaps: i8 = row.try_get("overlaps").map_err(|e| DomainError::Internal {
                message: format!("Failed to get overlap result: {}", e),
            })?;

            if overlaps == 1 {
                return Err(DomainError::Conflict {
                    message: format!(
                        "Car {} already booked for this period",
                        rental.license_plate
                    ),
                });
            }
        }

        let query = r#"
            INSERT INTO rentals (
                id, license_plate, cpf, start_date, end_date, total_price, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(rental.id.to_string())
            .bind(rental.license_plate.value())
            .bind(rental.cpf.digits())
            .bind(rental.period.start_date())
            .bind(rental.period.end_date())
            .bind(rental.total_price)
            .bind(rental.status.as_str())
            .bind(rental.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db)
                    if is_lock_contention(
                        db.downcast_ref::<sqlx::mysql::MySqlDatabaseError>().number(),
                    ) =>
                {
                    DomainError::Conflict {
                        message: format!(
                            "Car {} already booked for this period",
                            rental.license_plate
                        ),
                    }
                }
                _ => DomainError::Internal {
                    message: format!("Failed to create rental: {}", e),
                },
            })?;

        tx.commit().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to commit rental: {}", e),
        })?;

        Ok(rental)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, DomainError> {
        let query = r#"
            SELECT id, license_plate, cpf, start_date, end_date, total_price, status, created_at
            FROM rentals
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find rental: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_rental(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Rental>, DomainError> {
        let query = r#"
            SELECT id, license_plate, cpf, start_date, end_date, total_price, status, created_at
            FROM rentals
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list rentals: {}", e),
            })?;

        let mut rentals = Vec::new();
        for row in rows {
            rentals.push(Self::row_to_rental(&row)?);
        }
        Ok(rentals)
    }

    async fn find_by_plate(&self, plate: &LicensePlate) -> Result<Vec<Rental>, DomainError> {
        let query = r#"
            SELECT id, license_plate, cpf, start_date, end_date, total_price, status, created_at
            FROM rentals
            WHERE license_plate = ?
            ORDER BY start_date
        "#;

        let rows = sqlx::query(query)
            .bind(plate.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find rentals by plate: {}", e),
            })?;

        let mut rentals = Vec::new();
        for row in rows {
            rentals.push(Self::row_to_rental(&row)?);
        }
        Ok(rentals)
    }

    async fn update(&self, rental: Rental) -> Result<Rental, DomainError> {
        let query = r#"
            UPDATE rentals
            SET start_date = ?, end_date = ?, total_price = ?, status = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(rental.period.start_date())
            .bind(rental.period.end_date())
            .bind(rental.total_price)
            .bind(rental.status.as_str())
            .bind(rental.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update rental: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Rental".to_string(),
            });
        }
        Ok(rental)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM rentals WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete rental: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_active_overlap(
        &self,
        plate: &LicensePlate,
        period: &RentalPeriod,
    ) -> Result<bool, DomainError> {
        let row = sqlx::query(OVERLAP_EXISTS_SQL)
            .bind(plate.value())
            .bind(period.end_date())
            .bind(period.start_date())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to check overlap: {}", e),
            })?;

        let overlaps: i8 = row.try_get("overlaps").map_err(|e| DomainError::Internal {
            message: format!("Failed to get overlap result: {}", e),
        })?;

        Ok(overlaps == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_contention_is_a_conflict() {
        assert!(is_lock_contention(ER_LOCK_DEADLOCK));
        assert!(is_lock_contention(ER_LOCK_WAIT_TIMEOUT));
    }

    #[test]
    fn test_other_errors_stay_internal() {
        // duplicate key and generic syntax error numbers
        assert!(!is_lock_contention(1062));
        assert!(!is_lock_contention(1064));
        assert!(!is_lock_contention(0));
    }
}
