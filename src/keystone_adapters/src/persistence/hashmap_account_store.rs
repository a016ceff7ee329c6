use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use keystone_core::{Account, AccountRepository, AccountStoreError, NewAccount};
use secrecy::Secret;

use super::password_hash::{compute_password_hash, verify_password_hash};

#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl AccountRepository for HashMapAccountStore {
    #[tracing::instrument(name = "Adding account to HashMap store", skip_all)]
    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        if self.accounts.read().await.contains_key(account.email()) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }

        let (email, password) = account.into_parts();
        let password_hash = compute_password_hash(password)
            .await
            .map_err(AccountStoreError::UnexpectedError)?;

        // Hashing ran unlocked; re-check under the write lock.
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&email) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        let account = Account::new(email.clone(), password_hash);
        accounts.insert(email, account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(email)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    #[tracing::instrument(name = "Validating credentials in HashMap store", skip_all)]
    async fn verify_credentials(
        &self,
        email: &str,
        password: &Secret<String>,
    ) -> Result<Account, AccountStoreError> {
        let account = self.find_by_email(email).await?;

        verify_password_hash(account.password_hash().clone(), password.clone()).await?;

        Ok(account)
    }
}
