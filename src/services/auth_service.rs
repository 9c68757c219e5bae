//! Authentication service - Token issuance, validation, and login.
//!
//! Tokens are stateless HS256 JWTs with a fixed one-hour lifetime. There is
//! no refresh and no revocation list; a leaked token stays valid until it
//! expires naturally.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{Config, TOKEN_LIFETIME_HOURS};
use crate::domain::Password;
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// JWT claims payload.
///
/// Field names are part of the wire contract; `userId` is camelCase on the
/// wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub name: String,
    pub exp: i64,
}

/// Authenticated user returned by a successful login.
///
/// Never carries the password in any form.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    /// User identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User display name
    #[schema(example = "ahmad naufal")]
    pub name: String,
    /// User email address
    #[schema(example = "ahmad@gmail.com")]
    pub email: String,
    /// Signed session token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate by email and password, returning the user with a fresh
    /// session token. Unknown email or wrong password both surface as
    /// `InvalidCredentials`.
    async fn login(&self, email: String, password: String) -> AppResult<AuthenticatedUser>;

    /// Issue a signed session token for the given subject
    fn issue_token(&self, user_id: i32, name: &str) -> AppResult<String>;

    /// Verify a session token's signature and expiry, extracting claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService backed by the user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { users, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: String, password: String) -> AppResult<AuthenticatedUser> {
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let stored = Password::from_hash(user.password_hash.clone());
        if !stored.verify(&password) {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.issue_token(user.id, &user.name)?;

        Ok(AuthenticatedUser {
            id: user.id,
            name: user.name,
            email: user.email,
            token,
        })
    }

    fn issue_token(&self, user_id: i32, name: &str) -> AppResult<String> {
        let claims = Claims {
            user_id,
            name: name.to_string(),
            exp: (Utc::now() + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?;

        Ok(token)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        // Expiry is exact; the default 60s leeway would keep accepting
        // tokens past their `exp`
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &validation,
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::infra::repositories::MockUserRepository;
    use mockall::predicate::eq;

    fn test_config() -> Config {
        Config::with_secret("test-secret-key-for-testing-only-32chars")
    }

    fn stored_user(password: &str) -> User {
        User {
            id: 1,
            name: "ahmad naufal".to_string(),
            email: "ahmad@gmail.com".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn login_with_correct_credentials_issues_verifiable_token() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("ahmad@gmail.com"))
            .returning(|_| Ok(Some(stored_user("alta@1234"))));

        let service = Authenticator::new(Arc::new(repo), test_config());
        let authed = service
            .login("ahmad@gmail.com".to_string(), "alta@1234".to_string())
            .await
            .unwrap();

        assert_eq!(authed.id, 1);
        assert_eq!(authed.email, "ahmad@gmail.com");

        let claims = service.verify_token(&authed.token).unwrap();
        assert_eq!(claims.user_id, 1);
        assert_eq!(claims.name, "ahmad naufal");
        // Expiry is one hour out, give or take scheduling slack
        let lifetime = claims.exp - Utc::now().timestamp();
        assert!(lifetime > 3500 && lifetime <= 3600);
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_rejected() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(stored_user("alta@1234"))));

        let service = Authenticator::new(Arc::new(repo), test_config());
        let result = service
            .login("ahmad@gmail.com".to_string(), "wrong".to_string())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_rejected() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let service = Authenticator::new(Arc::new(repo), test_config());
        let result = service
            .login("nobody@gmail.com".to_string(), "alta@1234".to_string())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn token_is_rejected_the_moment_it_expires() {
        let service = Authenticator::new(Arc::new(MockUserRepository::new()), test_config());

        // Expired only seconds ago: there is no grace window
        let claims = Claims {
            user_id: 1,
            name: "ahmad naufal".to_string(),
            exp: (Utc::now() - Duration::seconds(30)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(test_config().jwt_secret_bytes()),
        )
        .unwrap();

        assert!(matches!(
            service.verify_token(&token),
            Err(AppError::Jwt(_))
        ));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let service = Authenticator::new(Arc::new(MockUserRepository::new()), test_config());

        let other =
            Authenticator::new(
                Arc::new(MockUserRepository::new()),
                Config::with_secret("another-secret-key-that-is-32-chars!"),
            );
        let token = other.issue_token(1, "ahmad naufal").unwrap();

        assert!(matches!(
            service.verify_token(&token),
            Err(AppError::Jwt(_))
        ));
    }

    #[test]
    fn claims_use_camel_case_user_id_on_the_wire() {
        let claims = Claims {
            user_id: 7,
            name: "ahmad naufal".to_string(),
            exp: 0,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("user_id").is_none());
    }
}
