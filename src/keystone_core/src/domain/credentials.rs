use secrecy::{ExposeSecret, Secret};

use crate::errors::Param;

use super::login_request::{BodyField, LoginBody};

/// Why a login body did not yield credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Not sent, `null` or the empty string
    Missing(Param),
    /// Sent as something other than a string
    NotText(Param),
}

/// Email and password extracted from a login body, both guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: Secret<String>,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(email: Secret<String>, password: Secret<String>) -> Self {
        Self { email, password }
    }

    /// Extract credentials, reporting the first unusable field.
    ///
    /// Email is checked before password.
    pub fn from_body(body: &LoginBody) -> Result<Self, FieldError> {
        let email = field(&body.email, Param::Email)?;
        let password = field(&body.password, Param::Password)?;

        Ok(Self {
            email: email.clone(),
            password: password.clone(),
        })
    }

    pub fn email(&self) -> &str {
        self.email.expose_secret()
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }
}

fn field(field: &BodyField, param: Param) -> Result<&Secret<String>, FieldError> {
    match field {
        BodyField::Text(value) if !value.expose_secret().is_empty() => Ok(value),
        BodyField::Text(_) | BodyField::Absent => Err(FieldError::Missing(param)),
        BodyField::NotText => Err(FieldError::NotText(param)),
    }
}
