use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request fields a client can be told about when a request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Email,
    Password,
    RepeatPassword,
}

impl Param {
    /// Name of the field as it appears in the JSON request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            Param::Email => "email",
            Param::Password => "password",
            Param::RepeatPassword => "repeatPassword",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that are allowed to reach the transport boundary.
///
/// Each variant carries only what the client needs to act on it. `ServerError`
/// has no payload: collaborator internals never reach a response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Missing param: {0}")]
    MissingParam(Param),
    #[error("Invalid param: {0}")]
    InvalidParam(Param),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Internal server error")]
    ServerError,
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingParam(_) | ApiError::InvalidParam(_) => 400,
            ApiError::Unauthorized => 401,
            ApiError::ServerError => 500,
        }
    }

    pub fn param(&self) -> Option<Param> {
        match self {
            ApiError::MissingParam(param) | ApiError::InvalidParam(param) => Some(*param),
            ApiError::Unauthorized | ApiError::ServerError => None,
        }
    }

    /// Wire representation of this error.
    pub fn body(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            param: self.param().map(|p| p.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

/// Failure reported by an injected collaborator (email checker, authenticator).
///
/// The message is for logs only; it is never rendered to a client.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CollaboratorError(pub String);

impl CollaboratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
