use keystone_core::{
    Account, AccountRepository, AccountStoreError, ApiError, CollaboratorError, EmailValidator,
    HttpResponse, NewAccount, Param, SignupRequest,
};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Error types specific to signup use case
#[derive(Debug, Error)]
pub enum SignupError {
    #[error("Missing param: {0}")]
    MissingParam(Param),
    #[error("Invalid param: {0}")]
    InvalidParam(Param),
    #[error("Password does not match repeatPassword")]
    PasswordMismatch,
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Email validator error: {0}")]
    EmailValidatorError(CollaboratorError),
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
}

impl From<AccountStoreError> for SignupError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::AccountAlreadyExists => SignupError::AccountAlreadyExists,
            other => SignupError::AccountStoreError(other),
        }
    }
}

impl SignupError {
    pub fn into_response(self) -> HttpResponse {
        match self {
            SignupError::MissingParam(param) => {
                HttpResponse::bad_request(ApiError::MissingParam(param))
            }
            SignupError::InvalidParam(param) => {
                HttpResponse::bad_request(ApiError::InvalidParam(param))
            }
            SignupError::PasswordMismatch => HttpResponse {
                status_code: 400,
                body: serde_json::json!({
                    "error": SignupError::PasswordMismatch.to_string(),
                    "param": Param::RepeatPassword.as_str(),
                }),
            },
            SignupError::AccountAlreadyExists => {
                HttpResponse::conflict(&SignupError::AccountAlreadyExists.to_string())
            }
            SignupError::EmailValidatorError(_) | SignupError::AccountStoreError(_) => {
                HttpResponse::server_error()
            }
        }
    }
}

/// Body returned once an account has been created.
#[derive(Debug, Serialize)]
pub struct SignupSuccessBody {
    pub id: Uuid,
    pub email: String,
}

/// Signup use case - validates the form and persists the account
#[derive(Clone)]
pub struct SignupUseCase<A, V>
where
    A: AccountRepository,
    V: EmailValidator,
{
    accounts: A,
    email_validator: V,
}

impl<A, V> SignupUseCase<A, V>
where
    A: AccountRepository,
    V: EmailValidator,
{
    pub fn new(accounts: A, email_validator: V) -> Self {
        Self {
            accounts,
            email_validator,
        }
    }

    /// Execute the signup use case
    ///
    /// # Returns
    /// The stored account, or the first problem found with the request
    #[tracing::instrument(name = "SignupUseCase::execute", skip_all)]
    pub async fn execute(&self, request: SignupRequest) -> Result<Account, SignupError> {
        let email = required(request.email, Param::Email)?;
        let password = required(request.password, Param::Password)?;
        let repeat_password = required(request.repeat_password, Param::RepeatPassword)?;

        let email_is_valid = self
            .email_validator
            .is_valid(email.expose_secret())
            .await
            .map_err(SignupError::EmailValidatorError)?;
        if !email_is_valid {
            return Err(SignupError::InvalidParam(Param::Email));
        }

        if password.expose_secret() != repeat_password.expose_secret() {
            return Err(SignupError::PasswordMismatch);
        }

        let account = NewAccount::new(email.expose_secret().clone(), password);
        let account = self.accounts.add_account(account).await?;

        tracing::info!(account_id = %account.id(), "Account created");
        Ok(account)
    }

    /// Execute signup and map the result to its HTTP response.
    ///
    /// An absent body is handled as an empty form.
    pub async fn route(&self, request: Option<SignupRequest>) -> HttpResponse {
        match self.execute(request.unwrap_or_default()).await {
            Ok(account) => HttpResponse::created(SignupSuccessBody {
                id: account.id(),
                email: account.email().to_string(),
            }),
            Err(error) => {
                match &error {
                    SignupError::EmailValidatorError(_) | SignupError::AccountStoreError(_) => {
                        tracing::error!(error = %error, "Signup failed with a server fault")
                    }
                    _ => tracing::debug!(error = %error, "Signup rejected"),
                }
                error.into_response()
            }
        }
    }
}

fn required(field: Option<Secret<String>>, param: Param) -> Result<Secret<String>, SignupError> {
    field
        .filter(|value| !value.expose_secret().is_empty())
        .ok_or(SignupError::MissingParam(param))
}
