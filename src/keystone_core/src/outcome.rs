use serde::Serialize;

use crate::{
    domain::{access_token::AccessToken, credentials::FieldError},
    errors::{ApiError, Param},
    http_abstraction::HttpResponse,
};

/// Transport-agnostic result of validating one login request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A required field was absent or empty
    MissingParam(Param),
    /// A field was present but malformed
    InvalidParam(Param),
    /// The authenticator did not hand out a token
    Unauthorized,
    /// Anything went wrong on our side; no detail is kept
    ServerFault,
    /// Credentials accepted
    Success(AccessToken),
}

/// Body of a successful login.
#[derive(Debug, Serialize)]
pub struct LoginSuccessBody {
    #[serde(rename = "accessToken")]
    pub access_token: AccessToken,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success(_))
    }

    /// Map the outcome to its transport response.
    pub fn into_response(self) -> HttpResponse {
        match self {
            LoginOutcome::MissingParam(param) => {
                HttpResponse::bad_request(ApiError::MissingParam(param))
            }
            LoginOutcome::InvalidParam(param) => {
                HttpResponse::bad_request(ApiError::InvalidParam(param))
            }
            LoginOutcome::Unauthorized => HttpResponse::unauthorized(),
            LoginOutcome::ServerFault => HttpResponse::server_error(),
            LoginOutcome::Success(access_token) => {
                HttpResponse::ok(LoginSuccessBody { access_token })
            }
        }
    }
}

impl From<FieldError> for LoginOutcome {
    fn from(error: FieldError) -> Self {
        match error {
            FieldError::Missing(param) => LoginOutcome::MissingParam(param),
            FieldError::NotText(param) => LoginOutcome::InvalidParam(param),
        }
    }
}

impl From<LoginOutcome> for HttpResponse {
    fn from(outcome: LoginOutcome) -> Self {
        outcome.into_response()
    }
}
