use std::{future::Future, panic::AssertUnwindSafe, sync::Arc, time::Duration};

use futures::FutureExt;
use keystone_core::{
    Authenticator, CollaboratorError, Credentials, EmailValidator, HttpResponse, LoginOutcome,
    LoginRequest, Param,
};
use thiserror::Error;

/// Faults absorbed by the validator. Never rendered to a client.
#[derive(Debug, Error)]
enum LoginFault {
    #[error("request has no JSON object body")]
    MissingBody,
    #[error("no {0} configured")]
    MissingCollaborator(&'static str),
    #[error("{0} failed: {1}")]
    Collaborator(&'static str, CollaboratorError),
    #[error("{0} panicked")]
    Panicked(&'static str),
    #[error("authentication did not finish within {0:?}")]
    TimedOut(Duration),
}

/// Login use case - turns an untrusted request into a [`LoginOutcome`].
///
/// Collaborators are optional at construction. A missing one is reported as a
/// server fault when the request reaches the step that needs it.
#[derive(Clone, Default)]
pub struct LoginValidator {
    authenticator: Option<Arc<dyn Authenticator>>,
    email_validator: Option<Arc<dyn EmailValidator>>,
    auth_timeout: Option<Duration>,
}

impl LoginValidator {
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        email_validator: Arc<dyn EmailValidator>,
    ) -> Self {
        Self {
            authenticator: Some(authenticator),
            email_validator: Some(email_validator),
            auth_timeout: None,
        }
    }

    pub fn builder() -> LoginValidatorBuilder {
        LoginValidatorBuilder::default()
    }

    /// Validate a login request.
    ///
    /// Always produces an outcome. Missing payloads, missing collaborators,
    /// collaborator errors, collaborator panics and an elapsed authentication
    /// timeout all end up as [`LoginOutcome::ServerFault`].
    #[tracing::instrument(name = "LoginValidator::validate", skip_all)]
    pub async fn validate(&self, request: Option<LoginRequest>) -> LoginOutcome {
        let outcome = match self.try_validate(request).await {
            Ok(outcome) => outcome,
            Err(fault) => {
                tracing::error!(error = %fault, "Login failed with a server fault");
                LoginOutcome::ServerFault
            }
        };

        tracing::debug!(?outcome, "Login validated");
        outcome
    }

    /// Validate a login request and map the outcome to its HTTP response.
    pub async fn route(&self, request: Option<LoginRequest>) -> HttpResponse {
        self.validate(request).await.into_response()
    }

    async fn try_validate(&self, request: Option<LoginRequest>) -> Result<LoginOutcome, LoginFault> {
        let body = request
            .and_then(|request| request.body)
            .ok_or(LoginFault::MissingBody)?;

        let credentials = match Credentials::from_body(&body) {
            Ok(credentials) => credentials,
            Err(error) => return Ok(error.into()),
        };

        let email_validator = self
            .email_validator
            .as_deref()
            .ok_or(LoginFault::MissingCollaborator("email validator"))?;

        let email_is_valid =
            guard("email validator", email_validator.is_valid(credentials.email())).await?;
        if !email_is_valid {
            return Ok(LoginOutcome::InvalidParam(Param::Email));
        }

        let authenticator = self
            .authenticator
            .as_deref()
            .ok_or(LoginFault::MissingCollaborator("authenticator"))?;

        let authentication = guard("authenticator", authenticator.authenticate(&credentials));
        let access_token = match self.auth_timeout {
            Some(limit) => tokio::time::timeout(limit, authentication)
                .await
                .map_err(|_| LoginFault::TimedOut(limit))??,
            None => authentication.await?,
        };

        Ok(match access_token {
            Some(access_token) => LoginOutcome::Success(access_token),
            None => LoginOutcome::Unauthorized,
        })
    }
}

/// Await a collaborator call, turning both its error and a panic into a fault.
async fn guard<T, F>(collaborator: &'static str, call: F) -> Result<T, LoginFault>
where
    F: Future<Output = Result<T, CollaboratorError>>,
{
    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(result) => result.map_err(|e| LoginFault::Collaborator(collaborator, e)),
        Err(_) => Err(LoginFault::Panicked(collaborator)),
    }
}

#[derive(Default)]
pub struct LoginValidatorBuilder {
    authenticator: Option<Arc<dyn Authenticator>>,
    email_validator: Option<Arc<dyn EmailValidator>>,
    auth_timeout: Option<Duration>,
}

impl LoginValidatorBuilder {
    pub fn authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn email_validator(mut self, email_validator: Arc<dyn EmailValidator>) -> Self {
        self.email_validator = Some(email_validator);
        self
    }

    /// Bound the time spent waiting for the authenticator.
    pub fn auth_timeout(mut self, timeout: Duration) -> Self {
        self.auth_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> LoginValidator {
        LoginValidator {
            authenticator: self.authenticator,
            email_validator: self.email_validator,
            auth_timeout: self.auth_timeout,
        }
    }
}
