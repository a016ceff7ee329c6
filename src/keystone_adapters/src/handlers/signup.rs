//! Framework-agnostic signup handler.

use keystone_application::SignupUseCase;
use keystone_core::{AccountRepository, EmailValidator, ResponseBuilder, SignupRequest};

/// Handle signup request - framework agnostic.
///
/// An empty or malformed body is treated as an empty form.
pub async fn handle_signup<A, V, B>(
    use_case: &SignupUseCase<A, V>,
    body: &[u8],
    builder: B,
) -> B::Response
where
    A: AccountRepository,
    V: EmailValidator,
    B: ResponseBuilder,
{
    let request = SignupRequest::from_json(body);

    use_case.route(request).await.write_to(builder)
}
