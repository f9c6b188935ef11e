//! JWT token service implementation.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use locadora_shared::config::AuthConfig;

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::domain::entities::User;
use crate::errors::{DomainError, TokenError};

/// Service issuing and verifying HS256 access tokens
///
/// Tokens are stateless: nothing is persisted, and revocation is out of
/// scope. Verification enforces expiry, not-before, and issuer.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_seconds: i64,
}

impl TokenService {
    /// Create a new token service with the given signing secret
    pub fn new(secret: &str, expiry_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_seconds,
        }
    }

    /// Create a token service from the auth configuration
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, config.token_expiry_seconds)
    }

    /// Issue an access token for the given user
    pub fn generate_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(user, self.expiry_seconds);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }

    /// Verify a token and return its claims
    pub fn verify_token(&self, token: &str) -> Result<Claims, DomainError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.set_issuer(&[JWT_ISSUER]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            let token_error = match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidToken => TokenError::InvalidTokenFormat,
                _ => TokenError::InvalidClaims,
            };
            DomainError::Token(token_error)
        })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    fn service() -> TokenService {
        TokenService::new("test_secret", 3600)
    }

    fn user() -> User {
        User::new("Test", "User", "test@gmail.com", "hash")
    }

    #[test]
    fn test_generate_and_verify_roundtrip() {
        let service = service();
        let user = user();

        let token = service.generate_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user.id);
        assert_eq!(claims.email, "test@gmail.com");
        assert_eq!(claims.iss, JWT_ISSUER);
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let token = service().generate_token(&user()).unwrap();

        let other = TokenService::new("other_secret", 3600);
        let result = other.verify_token(&token);
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::InvalidSignature))
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let result = service().verify_token("not.a.token");
        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Expiry far enough in the past to defeat the default leeway
        let service = TokenService::new("test_secret", -120);
        let token = service.generate_token(&user()).unwrap();

        let result = service.verify_token(&token);
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::TokenExpired))
        ));
    }

    #[test]
    fn test_from_config_uses_configured_secret() {
        let config = AuthConfig {
            jwt_secret: "configured".to_string(),
            token_expiry_seconds: 60,
            bcrypt_cost: 4,
        };
        let service = TokenService::from_config(&config);
        let token = service.generate_token(&user()).unwrap();

        assert!(TokenService::new("configured", 60).verify_token(&token).is_ok());
    }
}
