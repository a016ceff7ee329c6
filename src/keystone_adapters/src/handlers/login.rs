//! Framework-agnostic login handler.

use keystone_application::LoginValidator;
use keystone_core::{LoginRequest, ResponseBuilder};

/// Handle login request - framework agnostic.
///
/// # Arguments
///
/// * `validator` - The login validator with its collaborators
/// * `body` - Raw request body as received
/// * `builder` - Response builder (framework-specific but implements our trait)
///
/// # Example
///
/// ```ignore
/// pub async fn axum_login(State(validator): State<LoginValidator>, body: Bytes) -> Response {
///     handle_login(&validator, &body, response_builder()).await
/// }
/// ```
pub async fn handle_login<B>(validator: &LoginValidator, body: &[u8], builder: B) -> B::Response
where
    B: ResponseBuilder,
{
    let request = LoginRequest::from_json(body);

    validator.route(Some(request)).await.write_to(builder)
}
