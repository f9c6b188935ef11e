//! Customer management payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use locadora_core::domain::entities::Customer;

/// Request body for POST /api/v1/customers
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "cpf must not be empty"))]
    pub cpf: String,
}

/// Request body for PUT /api/v1/customers/{cpf}
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Customer representation returned by the API
///
/// The CPF is always rendered in its masked form (514.302.036-09).
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub name: String,
    pub cpf: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            name: customer.name,
            cpf: customer.cpf.formatted(),
        }
    }
}
