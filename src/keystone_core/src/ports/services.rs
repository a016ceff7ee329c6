use async_trait::async_trait;

use crate::{
    domain::{access_token::AccessToken, credentials::Credentials},
    errors::CollaboratorError,
};

/// Port trait for checking the format of an email address
#[async_trait]
pub trait EmailValidator: Send + Sync {
    async fn is_valid(&self, email: &str) -> Result<bool, CollaboratorError>;
}

/// Port trait for exchanging credentials for an access token.
///
/// `Ok(None)` means the credentials were not accepted. `Err` is reserved for
/// the authenticator itself failing.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<AccessToken>, CollaboratorError>;
}
