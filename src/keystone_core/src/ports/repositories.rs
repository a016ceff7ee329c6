use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::account::{Account, NewAccount};

// AccountRepository port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists)
                | (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::IncorrectPassword, Self::IncorrectPassword)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Document store for accounts. Implementations own password hashing.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Account, AccountStoreError>;
    async fn verify_credentials(
        &self,
        email: &str,
        password: &Secret<String>,
    ) -> Result<Account, AccountStoreError>;
}
