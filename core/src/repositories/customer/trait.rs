//! Customer repository trait defining the interface for customer persistence.

use async_trait::async_trait;

use crate::domain::entities::Customer;
use crate::domain::value_objects::Cpf;
use crate::errors::DomainError;

/// Repository trait for Customer entity persistence operations
///
/// The CPF is the natural key of a customer.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer
    ///
    /// Returns `DomainError::Conflict` when a customer with the same CPF
    /// already exists.
    async fn create(&self, customer: Customer) -> Result<Customer, DomainError>;

    /// Find a customer by CPF
    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Customer>, DomainError>;

    /// List every registered customer
    async fn list(&self) -> Result<Vec<Customer>, DomainError>;

    /// Update an existing customer identified by CPF
    ///
    /// Returns `DomainError::NotFound` when no customer carries that CPF.
    async fn update(&self, customer: Customer) -> Result<Customer, DomainError>;

    /// Delete a customer by CPF
    ///
    /// Returns `Ok(true)` if a customer was deleted, `Ok(false)` if none matched.
    async fn delete(&self, cpf: &Cpf) -> Result<bool, DomainError>;
}
