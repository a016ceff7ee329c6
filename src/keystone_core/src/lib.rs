pub mod domain;
pub mod errors;
pub mod http_abstraction;
pub mod outcome;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    access_token::AccessToken,
    account::{Account, NewAccount},
    credentials::{Credentials, FieldError},
    login_request::{BodyField, LoginBody, LoginRequest},
    signup_request::SignupRequest,
};

pub use errors::{ApiError, CollaboratorError, ErrorResponse, Param};

pub use ports::{
    repositories::{AccountRepository, AccountStoreError},
    services::{Authenticator, EmailValidator},
};

pub use http_abstraction::{HttpResponse, PlainResponseBuilder, ResponseBuilder};
pub use outcome::{LoginOutcome, LoginSuccessBody};
