//! Account registration and authentication payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use locadora_core::domain::entities::User;

/// Request body for POST /api/v1/register
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "lastname must not be empty"))]
    pub lastname: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Response body for a successful registration
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub id: Uuid,
    pub name: String,
    pub lastname: String,
    pub email: String,
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            lastname: user.lastname,
            email: user.email,
        }
    }
}

/// Request body for POST /api/v1/authenticate
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateRequest {
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Response body carrying the signed access token
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    pub token: String,
}
