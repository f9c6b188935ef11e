//! Authentication service implementation.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Service handling user registration and credential verification
pub struct AuthService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            user_repository,
            token_service,
            bcrypt_cost,
        }
    }

    /// Register a new user account
    ///
    /// The password is bcrypt-hashed before it ever reaches the repository.
    pub async fn register(
        &self,
        name: &str,
        lastname: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<User> {
        if name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }
        if password.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            }
            .into());
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        if self.user_repository.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = bcrypt::hash(password, self.bcrypt_cost)
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to hash password: {}", e),
            })?;

        let user = User::new(name, lastname, email, password_hash);
        let created = self.user_repository.create(user).await?;

        tracing::info!(user_id = %created.id, "user registered");
        Ok(created)
    }

    /// Verify credentials and issue an access token
    ///
    /// Unknown email and wrong password produce the same error, so callers
    /// cannot probe which emails are registered.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<String> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to verify password: {}", e),
            })?;

        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.token_service.generate_token(&user)
    }
}

/// Basic email shape check; full validation is the mail system's problem
fn is_valid_email(email: &str) -> bool {
    email.len() >= 5 && email.contains('@') && email.contains('.')
}
