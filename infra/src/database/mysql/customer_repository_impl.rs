//! MySQL implementation of the CustomerRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use locadora_core::domain::entities::Customer;
use locadora_core::domain::value_objects::Cpf;
use locadora_core::errors::DomainError;
use locadora_core::repositories::CustomerRepository;

/// MySQL implementation of CustomerRepository
///
/// CPFs are stored unformatted (eleven digits) and act as the primary key
/// of the `customers` table.
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    /// Create a new MySQL customer repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Customer entity
    fn row_to_customer(row: &sqlx::mysql::MySqlRow) -> Result<Customer, DomainError> {
        let cpf: String = row.try_get("cpf").map_err(|e| DomainError::Internal {
            message: format!("Failed to get cpf: {}", e),
        })?;
        let name: String = row.try_get("name").map_err(|e| DomainError::Internal {
            message: format!("Failed to get name: {}", e),
        })?;

        let cpf = Cpf::of(&cpf).map_err(|e| DomainError::Internal {
            message: format!("Stored CPF is invalid: {}", e),
        })?;
        Customer::new(name, cpf).map_err(|e| DomainError::Internal {
            message: format!("Stored customer is invalid: {}", e),
        })
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn create(&self, customer: Customer) -> Result<Customer, DomainError> {
        let query = "INSERT INTO customers (cpf, name) VALUES (?, ?)";

        let result = sqlx::query(query)
            .bind(customer.cpf.digits())
            .bind(&customer.name)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(customer),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DomainError::Conflict {
                    message: format!("Customer {} already registered", customer.cpf),
                })
            }
            Err(e) => Err(DomainError::Internal {
                message: format!("Failed to create customer: {}", e),
            }),
        }
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Customer>, DomainError> {
        let query = "SELECT cpf, name FROM customers WHERE cpf = ? LIMIT 1";

        let result = sqlx::query(query)
            .bind(cpf.digits())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find customer: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Customer>, DomainError> {
        let query = "SELECT cpf, name FROM customers ORDER BY cpf";

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list customers: {}", e),
            })?;

        let mut customers = Vec::new();
        for row in rows {
            customers.push(Self::row_to_customer(&row)?);
        }
        Ok(customers)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
        let query = "UPDATE customers SET name = ? WHERE cpf = ?";

        let result = sqlx::query(query)
            .bind(&customer.name)
            .bind(customer.cpf.digits())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update customer: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Customer".to_string(),
            });
        }
        Ok(customer)
    }

    async fn delete(&self, cpf: &Cpf) -> Result<bool, DomainError> {
        let query = "DELETE FROM customers WHERE cpf = ?";

        let result = sqlx::query(query)
            .bind(cpf.digits())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete customer: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
