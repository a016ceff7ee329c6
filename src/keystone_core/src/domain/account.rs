use chrono::{DateTime, Utc};
use secrecy::Secret;
use uuid::Uuid;

/// A stored account. Only the password hash is kept.
#[derive(Debug, Clone)]
pub struct Account {
    id: Uuid,
    email: String,
    password_hash: Secret<String>,
    created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(email: String, password_hash: Secret<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Rebuild an account loaded from storage.
    pub fn from_parts(
        id: Uuid,
        email: String,
        password_hash: Secret<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Account data accepted by signup, before the password is hashed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    email: String,
    password: Secret<String>,
}

impl NewAccount {
    pub fn new(email: String, password: Secret<String>) -> Self {
        Self { email, password }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }

    pub fn into_parts(self) -> (String, Secret<String>) {
        (self.email, self.password)
    }
}
