use chrono::{DateTime, Utc};
use keystone_core::{Account, AccountRepository, AccountStoreError, NewAccount};
use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::password_hash::{compute_password_hash, verify_password_hash};

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresAccountStore { pool }
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account::from_parts(
            row.id,
            row.email,
            Secret::from(row.password_hash),
            row.created_at,
        )
    }
}

#[async_trait::async_trait]
impl AccountRepository for PostgresAccountStore {
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let (email, password) = account.into_parts();
        let password_hash = compute_password_hash(password)
            .await
            .map_err(AccountStoreError::UnexpectedError)?;

        let account = Account::new(email, password_hash);

        sqlx::query(
            r#"
                INSERT INTO accounts (id, email, password_hash, created_at)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(account.id())
        .bind(account.email())
        .bind(account.password_hash().expose_secret())
        .bind(account.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountStoreError::AccountAlreadyExists;
                }
            }
            AccountStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(account)
    }

    #[tracing::instrument(name = "Retrieving account from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &str) -> Result<Account, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, email, password_hash, created_at
                FROM accounts
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(AccountStoreError::AccountNotFound);
        };

        Ok(row.into())
    }

    #[tracing::instrument(name = "Validating account credentials in PostgreSQL", skip_all)]
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
