//! Axum-specific signup route.

use axum::{extract::State, response::Response};
use bytes::Bytes;
use keystone_adapters::handlers;
use keystone_application::SignupUseCase;
use keystone_core::{AccountRepository, EmailValidator};

use crate::adapters::response_builder;

/// Axum signup route.
#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<A, V>(State(use_case): State<SignupUseCase<A, V>>, body: Bytes) -> Response
where
    A: AccountRepository + Clone + 'static,
    V: EmailValidator + Clone + 'static,
{
    handlers::handle_signup(&use_case, &body, response_builder()).await
}
