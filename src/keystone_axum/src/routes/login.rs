//! Axum-specific login route.

use axum::{extract::State, response::Response};
use bytes::Bytes;
use keystone_adapters::handlers;
use keystone_application::LoginValidator;

use crate::adapters::response_builder;

/// Axum login route.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(State(validator): State<LoginValidator>, body: Bytes) -> Response {
    handlers::handle_login(&validator, &body, response_builder()).await
}
