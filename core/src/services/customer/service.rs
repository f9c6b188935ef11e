//! Customer management service implementation.

use std::sync::Arc;

use crate::domain::entities::Customer;
use crate::domain::value_objects::Cpf;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CustomerRepository;

/// Service for registering and managing customers
pub struct CustomerService<K>
where
    K: CustomerRepository,
{
    customer_repository: Arc<K>,
}

impl<K> CustomerService<K>
where
    K: CustomerRepository,
{
    /// Create a new customer service
    pub fn new(customer_repository: Arc<K>) -> Self {
        Self {
            customer_repository,
        }
    }

    /// Register a new customer
    pub async fn register_customer(&self, name: &str, cpf: &str) -> DomainResult<Customer> {
        let cpf = Cpf::of(cpf)?;
        let customer = Customer::new(name, cpf)?;

        let created = self.customer_repository.create(customer).await?;
        tracing::info!(cpf = %created.cpf, "customer registered");
        Ok(created)
    }

    /// Fetch a single customer by CPF
    pub async fn get_customer(&self, cpf: &str) -> DomainResult<Customer> {
        let cpf = Cpf::of(cpf)?;
        self.customer_repository
            .find_by_cpf(&cpf)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Customer".to_string(),
            })
    }

    /// List every registered customer
    pub async fn list_customers(&self) -> DomainResult<Vec<Customer>> {
        self.customer_repository.list().await
    }

    /// Rename a customer; the CPF never changes
    pub async fn rename_customer(&self, cpf: &str, name: &str) -> DomainResult<Customer> {
        let mut customer = self.get_customer(cpf).await?;
        customer.rename(name)?;
        self.customer_repository.update(customer).await
    }

    /// Remove a customer
    pub async fn remove_customer(&self, cpf: &str) -> DomainResult<()> {
        let cpf = Cpf::of(cpf)?;
        if !self.customer_repository.delete(&cpf).await? {
            return Err(DomainError::NotFound {
                resource: "Customer".to_string(),
            });
        }
        Ok(())
    }
}
