//! Mock implementation of CustomerRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Customer;
use crate::domain::value_objects::Cpf;
use crate::errors::DomainError;

use super::trait_::CustomerRepository;

/// In-memory customer repository for testing
pub struct MockCustomerRepository {
    customers: Arc<RwLock<HashMap<Cpf, Customer>>>,
}

impl MockCustomerRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepository {
    async fn create(&self, customer: Customer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;

        if customers.contains_key(&customer.cpf) {
            return Err(DomainError::Conflict {
                message: format!("Customer {} already registered", customer.cpf),
            });
        }

        customers.insert(customer.cpf.clone(), customer.clone());
        Ok(customer)
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.get(cpf).cloned())
    }

    async fn list(&self) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().await;
        let mut all: Vec<Customer> = customers.values().cloned().collect();
        all.sort_by(|a, b| a.cpf.digits().cmp(b.cpf.digits()));
        Ok(all)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;

        if !customers.contains_key(&customer.cpf) {
            return Err(DomainError::NotFound {
                resource: "Customer".to_string(),
            });
        }

        customers.insert(customer.cpf.clone(), customer.clone());
        Ok(customer)
    }

    async fn delete(&self, cpf: &Cpf) -> Result<bool, DomainError> {
        let mut customers = self.customers.write().await;
        Ok(customers.remove(cpf).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str, cpf: &str) -> Customer {
        Customer::new(name, Cpf::of(cpf).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockCustomerRepository::new();
        repo.create(customer("Gustavo Gomes", "12345678909"))
            .await
            .unwrap();

        let found = repo
            .find_by_cpf(&Cpf::of("12345678909").unwrap())
            .await
            .unwrap();
        assert_eq!(found.unwrap().name, "Gustavo Gomes");
    }

    #[tokio::test]
    async fn test_duplicate_cpf_is_rejected() {
        let repo = MockCustomerRepository::new();
        repo.create(customer("Gustavo Gomes", "12345678909"))
            .await
            .unwrap();

        let result = repo.create(customer("Marcos Silva", "12345678909")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }
}
