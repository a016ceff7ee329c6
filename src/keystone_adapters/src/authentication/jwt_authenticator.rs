use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use keystone_core::{
    AccessToken, Account, AccountRepository, AccountStoreError, Authenticator, CollaboratorError,
    Credentials,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Claims carried by issued access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

/// Authenticator that checks credentials against an account store and issues
/// HS256 JWTs.
#[derive(Clone)]
pub struct JwtAuthenticator<A>
where
    A: AccountRepository,
{
    accounts: A,
    config: JwtAuthConfig,
}

impl<A> JwtAuthenticator<A>
where
    A: AccountRepository,
{
    pub fn new(accounts: A, config: JwtAuthConfig) -> Self {
        Self { accounts, config }
    }

    fn issue_token(&self, account: &Account) -> Result<AccessToken, CollaboratorError> {
        let delta = chrono::Duration::try_seconds(self.config.token_ttl_in_seconds)
            .ok_or_else(|| CollaboratorError::new("Failed to create auth token duration"))?;

        let issued_at = Utc::now();
        let exp = issued_at
            .checked_add_signed(delta)
            .ok_or_else(|| CollaboratorError::new("Duration out of range"))?
            .timestamp();

        let claims = Claims {
            sub: account.id().to_string(),
            email: account.email().to_string(),
            iat: issued_at.timestamp(),
            exp,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map_err(|e| CollaboratorError::new(format!("Failed to encode token: {e}")))?;

        AccessToken::parse(token).ok_or_else(|| CollaboratorError::new("Encoded an empty token"))
    }

    /// Decode and validate a token issued by this authenticator.
    pub fn decode_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

#[async_trait::async_trait]
impl<A> Authenticator for JwtAuthenticator<A>
where
    A: AccountRepository,
{
    #[tracing::instrument(name = "JwtAuthenticator::authenticate", skip_all)]
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<AccessToken>, CollaboratorError> {
        let account = match self
            .accounts
            .verify_credentials(credentials.email(), credentials.password())
            .await
        {
            Ok(account) => account,
            Err(AccountStoreError::AccountNotFound | AccountStoreError::IncorrectPassword) => {
                return Ok(None);
            }
            Err(e) => return Err(CollaboratorError::new(e.to_string())),
        };

        self.issue_token(&account).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use keystone_core::NewAccount;

    use super::*;
    use crate::{config::constants::test::JWT_SECRET, persistence::HashMapAccountStore};

    async fn authenticator_with_account(
        email: &str,
        password: &str,
    ) -> JwtAuthenticator<HashMapAccountStore> {
        let store = HashMapAccountStore::new();
        store
            .add_account(NewAccount::new(
                email.to_string(),
                Secret::new(password.to_string()),
            ))
            .await
            .unwrap();
        JwtAuthenticator::new(store, jwt_auth_config(JWT_SECRET))
    }

    fn jwt_auth_config(secret: &str) -> JwtAuthConfig {
        JwtAuthConfig {
            jwt_secret: Secret::new(secret.to_string()),
            token_ttl_in_seconds: 600,
        }
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials::new(
            Secret::new(email.to_string()),
            Secret::new(password.to_string()),
        )
    }

    #[tokio::test]
    async fn test_issues_token_for_valid_credentials() {
        let authenticator = authenticator_with_account("a@b.com", "password123").await;

        let token = authenticator
            .authenticate(&credentials("a@b.com", "password123"))
            .await
            .unwrap()
            .expect("token issued");

        let claims = authenticator.decode_token(token.as_str()).unwrap();
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.exp - claims.iat, 600);
    }

    #[tokio::test]
    async fn test_wrong_password_yields_no_token() {
        let authenticator = authenticator_with_account("a@b.com", "password123").await;

        let token = authenticator
            .authenticate(&credentials("a@b.com", "wrong"))
            .await
            .unwrap();

        assert!(token.is_none());
    }

    #[tokio::test]
    async fn test_unknown_account_yields_no_token() {
        let authenticator = authenticator_with_account("a@b.com", "password123").await;

        let token = authenticator
            .authenticate(&credentials("nobody@b.com", "password123"))
            .await
            .unwrap();

        assert!(token.is_none());
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_rejected() {
        let authenticator = authenticator_with_account("a@b.com", "password123").await;
        let token = authenticator
            .authenticate(&credentials("a@b.com", "password123"))
            .await
            .unwrap()
            .unwrap();

        let other =
            JwtAuthenticator::new(HashMapAccountStore::new(), jwt_auth_config("another-secret"));

        assert!(other.decode_token(token.as_str()).is_err());
    }
}
