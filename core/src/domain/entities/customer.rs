//! Customer entity representing a person who rents cars.

use serde::Serialize;

use crate::domain::value_objects::Cpf;
use crate::errors::ValidationError;

/// A customer of the rental agency, identified by CPF
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    /// Full name, non-blank
    pub name: String,

    /// Unique CPF identifying the customer
    pub cpf: Cpf,
}

impl Customer {
    /// Creates a new Customer after validating the name
    pub fn new(name: impl Into<String>, cpf: Cpf) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            });
        }
        Ok(Self { name, cpf })
    }

    /// Renames the customer, keeping the same validation as construction
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            });
        }
        self.name = name;
        Ok(())
    }
}
