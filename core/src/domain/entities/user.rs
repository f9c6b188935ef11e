//! User entity representing an operator account of the rental system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a system user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular operator
    User,
    /// Administrative account
    Admin,
}

/// A registered user able to authenticate against the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// First name
    pub name: String,

    /// Last name
    pub lastname: String,

    /// Login email, unique across users
    pub email: String,

    /// Bcrypt hash of the password; never the plain text
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Assigned role
    pub role: Role,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new regular User
    pub fn new(
        name: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            lastname: lastname.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role: Role::User,
            created_at: Utc::now(),
        }
    }
}
